use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;

use zuschat_api::{HttpBackend, TimerDeadline};
use zuschat_chat::ChatController;
use zuschat_logging::ConversationLogger;
use zuschat_store::{FileStore, KeyValueStore, MemoryStore, SessionStore};

use crate::config::ClientConfig;

/// Open the session store the configuration points at
pub fn open_session_store(config: &ClientConfig) -> Result<SessionStore> {
    let storage: Arc<dyn KeyValueStore> = if config.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        let store = FileStore::open(&config.data_dir)
            .with_context(|| format!("Failed to open data directory: {}", config.data_dir.display()))?;
        Arc::new(store)
    };

    Ok(SessionStore::open(storage))
}

/// Build a controller over the HTTP backend, resuming the stored session
pub async fn open_controller(config: &ClientConfig) -> Result<ChatController> {
    let store = open_session_store(config)?;
    let backend = Arc::new(HttpBackend::new(config.backend_url.clone(), config.verbose));
    let deadline = Arc::new(TimerDeadline::new(config.timeout));

    if config.verbose {
        println!(
            "{}",
            format!("🔧 DEBUG: endpoint {} (timeout {}s)", backend.endpoint(), config.timeout.as_secs()).bright_black()
        );
    }

    let controller = ChatController::open(store, backend, deadline);
    if !config.log_conversations {
        return Ok(controller);
    }

    match ConversationLogger::new(&config.logs_dir()).await {
        Ok(logger) => {
            if config.verbose {
                println!(
                    "{}",
                    format!("📝 Logging conversation to {}", logger.file_path().display()).bright_black()
                );
            }
            Ok(controller.with_logger(logger))
        }
        Err(e) => {
            eprintln!("{} Logging disabled: {}", "⚠️".yellow(), e);
            Ok(controller)
        }
    }
}
