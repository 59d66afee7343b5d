use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use zuschat_chat::render::{footer, paint, paint_footer, paint_message, render, MessageView};
use zuschat_chat::{ChatController, Command, SubmitOutcome};
use zuschat_types::PENDING_TEXT;

use super::setup::open_controller;
use crate::config::ClientConfig;

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &ClientConfig) -> Result<()> {
    println!("{}", "🤖 ZUS Chat".bright_cyan().bold());
    println!("{}", format!("Backend: {}", config.backend_url).bright_black());
    println!("{}", "Type 'exit' or 'quit' to exit, or '/reset' to clear history\n".bright_black());

    let mut chat = open_controller(config).await?;

    println!("{}", paint(&render(chat.history(), chat.is_sending())));
    println!("{}\n", paint_footer(&footer(chat.session_id(), chat.is_sending())));

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "exit" || line == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                let _ = rl.add_history_entry(line);
                handle_line(&mut chat, line).await;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("{} {}", "Input error:".bright_red(), e);
                break;
            }
        }
    }

    chat.shutdown().await;
    Ok(())
}

async fn handle_line(chat: &mut ChatController, line: &str) {
    if matches!(Command::parse(line), Command::Message(_)) {
        println!("{}", format!("🤖 {}", PENDING_TEXT).dimmed().italic());
    }

    match chat.submit(line).await {
        SubmitOutcome::Ignored => {}
        SubmitOutcome::Reset(session_id) => {
            println!(
                "{} History cleared. New session: {}\n",
                "🔄".bright_green(),
                session_id.short()
            );
        }
        SubmitOutcome::Answered { .. } | SubmitOutcome::Failed(_) => {
            if let Some(message) = chat.history().last() {
                println!("{}", paint_message(&MessageView::from_message(message)));
            }
        }
    }
}
