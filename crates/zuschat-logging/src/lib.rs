// Logging module - conversation and request logging
pub mod conversation_logger;
pub mod request_logger;

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

pub use conversation_logger::ConversationLogger;
pub use request_logger::{log_request, log_response};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Print a non-fatal warning to stderr
pub fn warn(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

/// Base zuschat directory (~/.zuschat); not created here
pub fn get_zuschat_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    Ok(PathBuf::from(home_dir).join(".zuschat"))
}

/// Default directory for durable chat state (~/.zuschat/data)
pub fn default_data_dir() -> Result<PathBuf> {
    Ok(get_zuschat_dir()?.join("data"))
}
