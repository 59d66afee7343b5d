use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::time::Duration;

use zuschat_logging::default_data_dir;
use zuschat_types::DEFAULT_BACKEND_URL;

use crate::cli::Cli;

/// Settings resolved from flags, environment and defaults
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
    pub timeout: Duration,
    pub data_dir: PathBuf,
    pub verbose: bool,
    pub log_conversations: bool,
    pub ephemeral: bool,
}

impl ClientConfig {
    /// Precedence: CLI flag > environment (including `.env`) > default.
    /// clap already folds the environment into `cli`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let backend_url = cli
            .backend_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .to_string();
        validate_backend_url(&backend_url)?;

        let data_dir = match &cli.data_dir {
            Some(dir) => expand_tilde(dir)?,
            None => default_data_dir()?,
        };

        Ok(Self {
            backend_url,
            timeout: Duration::from_secs(cli.timeout_secs),
            data_dir,
            verbose: cli.verbose,
            log_conversations: !cli.no_log,
            ephemeral: cli.ephemeral,
        })
    }

    /// Conversation logs live next to the data directory
    pub fn logs_dir(&self) -> PathBuf {
        match self.data_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join("logs"),
            _ => self.data_dir.join("logs"),
        }
    }
}

fn validate_backend_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid backend URL: {}", url))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Backend URL must use http or https: {}", url);
    }
    Ok(())
}

/// Expand a leading `~` to the home directory
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;
    Ok(PathBuf::from(home).join(rest))
}
