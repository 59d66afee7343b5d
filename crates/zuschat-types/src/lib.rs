//! Core types and structures for zuschat
//!
//! This crate provides the message model, session identifiers and the
//! wire types exchanged with the assistant backend.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

// ============================================================================
// Constants
// ============================================================================

/// Backend base URL used when nothing is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL
pub const BACKEND_URL_ENV: &str = "ZUSCHAT_BACKEND_URL";

/// Client-side budget for a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Storage key for the serialized message history
pub const HISTORY_KEY: &str = "zus_chat_history";

/// Storage key for the session identifier
pub const SESSION_KEY: &str = "zus_session_id";

/// Input that resets the conversation instead of being sent
pub const RESET_COMMAND: &str = "/reset";

/// Placeholder content while an answer is awaited
pub const PENDING_TEXT: &str = "Bot is thinking...";

/// Diagnostic for a pending message that survived a restart
pub const INTERRUPTED_TEXT: &str = "Error: Request interrupted before the backend responded";

// ============================================================================
// Session
// ============================================================================

/// Opaque identifier correlating exchanges with the backend.
///
/// Uniqueness is best-effort: wall-clock milliseconds plus a random suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        Self(format!(
            "session_{}_{}",
            Utc::now().timestamp_millis(),
            random_suffix(9)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for status lines
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(20).collect();
        format!("{}...", head)
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn random_suffix(len: usize) -> String {
    Uuid::new_v4().simple().to_string().chars().take(len).collect()
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Message Types
// ============================================================================

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "bot")]
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single entry in the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(alias = "type")]
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, alias = "isThinking")]
    pub is_pending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_used: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl Message {
    /// A message typed by the user
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg_{}_user_{}", Utc::now().timestamp_millis(), random_suffix(6)),
            role: Role::User,
            content: content.into(),
            is_pending: false,
            tool_used: None,
            timestamp: now_iso8601(),
        }
    }

    /// Placeholder assistant message shown while a request is in flight
    pub fn pending() -> Self {
        Self {
            id: format!("msg_{}_thinking_{}", Utc::now().timestamp_millis(), random_suffix(6)),
            role: Role::Assistant,
            content: PENDING_TEXT.to_string(),
            is_pending: true,
            tool_used: None,
            timestamp: now_iso8601(),
        }
    }

    /// Replace the placeholder with the backend's answer
    pub fn settle(&mut self, answer: String, tool_used: Option<String>) {
        self.content = answer;
        self.tool_used = tool_used;
        self.is_pending = false;
    }

    /// Replace the placeholder with a diagnostic
    pub fn fail(&mut self, diagnostic: String) {
        self.content = diagnostic;
        self.is_pending = false;
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

/// Successful body returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_used: Option<String>,
}
