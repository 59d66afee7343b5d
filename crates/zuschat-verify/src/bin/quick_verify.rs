use anyhow::{Context, Result};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let root = std::env::current_dir().context("Failed to determine current directory")?;

    let report = zuschat_verify::quick_verify(&root);
    print!("{}", zuschat_verify::format_banner(&report));

    Ok(ExitCode::from(report.exit_code()))
}
