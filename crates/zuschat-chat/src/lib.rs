//! Conversation management for zuschat
//!
//! This crate provides the chat state machine, the async driver that talks
//! to the backend, and the terminal rendering of a conversation.

pub mod controller;
pub mod render;
pub mod state;

pub use controller::{ChatController, SubmitOutcome};
pub use render::{
    footer, paint, paint_badge, paint_footer, paint_message, render, Footer, MessageView, ToolBadge, Transcript,
};
pub use state::{reduce, ChatEvent, ChatState, Command, Phase};
