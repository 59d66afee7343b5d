pub mod commands;
pub mod repl;
pub mod setup;
pub mod task;

pub use commands::{reset_session, show_history};
pub use repl::run_repl_mode;
pub use setup::{open_controller, open_session_store};
pub use task::run_task_mode;
