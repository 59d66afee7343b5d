use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use zuschat::app::{reset_session, run_repl_mode, run_task_mode, show_history};
use zuschat::{Cli, ClientConfig, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        clap_complete::generate(shell, &mut Cli::command(), "zuschat", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = ClientConfig::from_cli(&cli)?;

    if let Some(command) = &cli.command {
        match command {
            Commands::History => show_history(&config)?,
            Commands::Reset => reset_session(&config)?,
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(message) = &cli.message {
        let answered = run_task_mode(&config, message).await?;
        return Ok(if answered { ExitCode::SUCCESS } else { ExitCode::from(1) });
    }

    run_repl_mode(&config).await?;
    Ok(ExitCode::SUCCESS)
}
