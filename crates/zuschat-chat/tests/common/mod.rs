#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use zuschat_api::{BackendError, ChatBackend, ManualDeadline};
use zuschat_chat::ChatController;
use zuschat_store::{KeyValueStore, MemoryStore, SessionStore};
use zuschat_types::{ChatRequest, ChatResponse};

pub const TEST_BASE_URL: &str = "http://localhost:8000";

/// Backend that replays canned results and records every request it sees
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<ChatResponse, BackendError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, answer: &str, tool_used: Option<&str>) -> Self {
        self.push(Ok(ChatResponse {
            answer: answer.to_string(),
            tool_used: tool_used.map(str::to_string),
        }))
    }

    pub fn fail(self, error: BackendError) -> Self {
        self.push(Err(error))
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn push(self, reply: Result<ChatResponse, BackendError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Malformed("no scripted reply".to_string())))
    }

    fn base_url(&self) -> &str {
        TEST_BASE_URL
    }
}

/// Backend whose requests never resolve
pub struct SilentBackend;

#[async_trait]
impl ChatBackend for SilentBackend {
    async fn send(&self, _request: &ChatRequest) -> Result<ChatResponse, BackendError> {
        std::future::pending().await
    }

    fn base_url(&self) -> &str {
        TEST_BASE_URL
    }
}

pub fn manual_deadline() -> Arc<ManualDeadline> {
    Arc::new(ManualDeadline::new(Duration::from_secs(30)))
}

pub fn controller_with(
    storage: Arc<MemoryStore>,
    backend: Arc<dyn ChatBackend>,
    deadline: Arc<ManualDeadline>,
) -> ChatController {
    let storage: Arc<dyn KeyValueStore> = storage;
    ChatController::open(SessionStore::open(storage), backend, deadline)
}

pub fn controller(backend: Arc<dyn ChatBackend>) -> ChatController {
    controller_with(Arc::new(MemoryStore::new()), backend, manual_deadline())
}
