use async_trait::async_trait;

use zuschat_logging::{log_request, log_response};
use zuschat_types::{ChatRequest, ChatResponse};

use crate::{BackendError, ChatBackend};

/// Endpoint for the chat route under `base_url`.
///
/// Trailing slashes are trimmed and `/chat` is appended unless present.
pub fn chat_endpoint(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.ends_with("/chat") {
        trimmed.to_string()
    } else {
        format!("{}/chat", trimmed)
    }
}

/// `POST /chat` over reqwest
pub struct HttpBackend {
    base_url: String,
    endpoint: String,
    client: reqwest::Client,
    verbose: bool,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, verbose: bool) -> Self {
        let base_url = base_url.into();
        Self {
            endpoint: chat_endpoint(&base_url),
            base_url,
            client: reqwest::Client::new(),
            verbose,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, error: reqwest::Error) -> BackendError {
        if error.is_connect() || error.is_request() {
            BackendError::Unreachable {
                base_url: self.base_url.clone(),
            }
        } else {
            BackendError::Malformed(error.to_string())
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        log_request(&self.endpoint, request, self.verbose);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Malformed(format!("Failed to read response: {}", e)))?;

        log_response(&status, &body, self.verbose);

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        serde_json::from_str::<ChatResponse>(&body)
            .map_err(|e| BackendError::Malformed(format!("Invalid response from backend: {}", e)))
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_endpoint_appends_route() {
        assert_eq!(chat_endpoint("http://localhost:8000"), "http://localhost:8000/chat");
        assert_eq!(chat_endpoint("http://localhost:8000/"), "http://localhost:8000/chat");
        assert_eq!(chat_endpoint(" https://api.example.com/v1// "), "https://api.example.com/v1/chat");
    }

    #[test]
    fn test_chat_endpoint_keeps_existing_route() {
        assert_eq!(chat_endpoint("http://localhost:8000/chat"), "http://localhost:8000/chat");
        assert_eq!(chat_endpoint("http://localhost:8000/chat/"), "http://localhost:8000/chat");
    }
}
