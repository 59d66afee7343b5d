use anyhow::{Context, Result};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let root = std::env::current_dir().context("Failed to determine current directory")?;

    let report = zuschat_verify::verify_structure(&root);
    print!("{}", zuschat_verify::format_checklist(&report));

    Ok(ExitCode::from(report.exit_code()))
}
