use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use zuschat_types::{Message, SessionId};

#[derive(Serialize)]
struct LogEntry<'a> {
    timestamp: String, // ISO‑8601 Local time
    session_id: &'a str,
    message_id: &'a str,
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_used: Option<&'a str>,
}

/// Append-only JSONL transcript of every settled message.
pub struct ConversationLogger {
    file_path: PathBuf,
    file: Option<tokio::fs::File>,
    reported_failure: bool,
}

impl ConversationLogger {
    /// Create a new logger; generates the file name based on the current local time.
    pub async fn new(logs_dir: &Path) -> Result<Self> {
        fs::create_dir_all(logs_dir)
            .await
            .with_context(|| format!("Failed to create logs directory: {}", logs_dir.display()))?;

        let filename = format!("zchat-{}.jsonl", Local::now().format("%Y-%m-%d-%H%M%S"));
        let file_path = logs_dir.join(filename);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)
            .await
            .with_context(|| format!("Failed to open log file: {}", file_path.display()))?;

        Ok(Self {
            file_path,
            file: Some(file),
            reported_failure: false,
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Append a single log entry. Write failures are reported once and then ignored.
    pub async fn log(&mut self, session_id: &SessionId, message: &Message) {
        let entry = LogEntry {
            timestamp: Local::now().to_rfc3339(),
            session_id: session_id.as_str(),
            message_id: &message.id,
            role: message.role.as_str(),
            content: &message.content,
            tool_used: message.tool_used.as_deref(),
        };

        let Some(file) = &mut self.file else {
            return;
        };
        let Ok(json) = serde_json::to_string(&entry) else {
            return;
        };

        let result = async {
            file.write_all(json.as_bytes()).await?;
            file.write_all(b"\n").await?;
            file.flush().await
        }
        .await;

        if let Err(e) = result {
            if !self.reported_failure {
                crate::warn(&format!("[Logging error] {}", e));
                self.reported_failure = true;
            }
        }
    }

    /// Close the logger (explicit drop). Called on graceful shutdown.
    pub async fn shutdown(&mut self) {
        if let Some(file) = self.file.take() {
            let _ = file.sync_all().await;
        }
    }
}
