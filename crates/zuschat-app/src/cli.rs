use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use zuschat_types::REQUEST_TIMEOUT;

/// CLI arguments for zuschat
#[derive(Parser, Debug)]
#[command(name = "zuschat")]
#[command(about = "Terminal chat client for the ZUS assistant backend")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Backend base URL; `/chat` is appended when missing
    #[arg(long, value_name = "URL", env = "ZUSCHAT_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Directory holding the session id and history (default: ~/.zuschat/data)
    #[arg(long, value_name = "DIR", env = "ZUSCHAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Seconds to wait for the backend before giving up
    #[arg(
        long,
        value_name = "SECS",
        env = "ZUSCHAT_TIMEOUT_SECS",
        default_value_t = REQUEST_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Dump HTTP requests and responses
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not write the conversation log
    #[arg(long)]
    pub no_log: bool,

    /// Keep the session in memory only; nothing is read from or written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Send a single message, print the answer and exit
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the stored conversation and session id
    History,
    /// Clear the stored conversation and start a new session
    Reset,
}
