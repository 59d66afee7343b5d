use std::time::Duration;
use thiserror::Error;

/// Every way an exchange with the backend can fail.
///
/// The `Display` form is the diagnostic shown in place of the answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// No response within the client-side budget
    #[error("Error: Request timeout (backend took too long to respond)")]
    Timeout(Duration),

    /// Transport failure; nothing came back
    #[error("Error: Cannot connect to backend at {base_url}. Is the server running?")]
    Unreachable { base_url: String },

    /// The backend answered with a non-2xx status
    #[error("Error: API error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// A 2xx body that is not a usable answer
    #[error("Error: {0}")]
    Malformed(String),
}

impl BackendError {
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, BackendError::Timeout(_))
    }
}
