//! Backend communication for zuschat
//!
//! - [`ChatBackend`]: the capability the chat controller talks to
//! - [`HttpBackend`]: reqwest implementation of `POST /chat`
//! - [`Deadline`]: cancellable time budget raced against each request
//! - [`BackendError`]: timeout / unreachable / server error taxonomy

mod deadline;
mod error;
mod http;

pub use deadline::{with_deadline, Deadline, ManualDeadline, TimerDeadline};
pub use error::BackendError;
pub use http::{chat_endpoint, HttpBackend};

use async_trait::async_trait;
use zuschat_types::{ChatRequest, ChatResponse};

/// A remote assistant that answers one message at a time
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send a single request. Implementations must not retry.
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError>;

    /// Base URL as configured, used in diagnostics
    fn base_url(&self) -> &str;
}
