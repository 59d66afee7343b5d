use anyhow::Result;
use colored::Colorize;

use zuschat_chat::render::{paint_message, MessageView};
use zuschat_chat::SubmitOutcome;

use super::setup::open_controller;
use crate::config::ClientConfig;

/// Run in task mode: send one message, print the settled answer and exit.
///
/// Returns `true` when the backend answered.
pub async fn run_task_mode(config: &ClientConfig, message: &str) -> Result<bool> {
    let mut chat = open_controller(config).await?;
    let outcome = chat.submit(message).await;
    chat.shutdown().await;

    let answered = match outcome {
        SubmitOutcome::Ignored => {
            eprintln!("{} Nothing to send: the message is empty", "⚠️".yellow());
            false
        }
        SubmitOutcome::Reset(session_id) => {
            println!("{} History cleared. New session: {}", "🔄".bright_green(), session_id.short());
            true
        }
        SubmitOutcome::Answered { .. } => {
            print_last(chat.history().last());
            true
        }
        SubmitOutcome::Failed(e) => {
            print_last(chat.history().last());
            if config.verbose {
                eprintln!("{} {:?}", "❌".bright_red(), e);
            }
            false
        }
    };

    Ok(answered)
}

fn print_last(message: Option<&zuschat_types::Message>) {
    if let Some(message) = message {
        println!("{}", paint_message(&MessageView::from_message(message)));
    }
}
