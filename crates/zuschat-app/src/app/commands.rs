use anyhow::Result;
use colored::Colorize;

use zuschat_chat::render::{footer, paint, paint_footer, render};

use super::setup::open_session_store;
use crate::config::ClientConfig;

/// `zuschat history`
pub fn show_history(config: &ClientConfig) -> Result<()> {
    let store = open_session_store(config)?;
    let history = store.load_history();

    println!("{}", paint(&render(&history, false)));
    println!("{}", paint_footer(&footer(store.session_id(), false)));
    Ok(())
}

/// `zuschat reset`
pub fn reset_session(config: &ClientConfig) -> Result<()> {
    let mut store = open_session_store(config)?;
    let session_id = store.reset();

    println!("{} History cleared. New session: {}", "🔄".bright_green(), session_id.short());
    Ok(())
}
