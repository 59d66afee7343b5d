use std::sync::Arc;

use zuschat_api::{with_deadline, BackendError, ChatBackend, Deadline};
use zuschat_logging::ConversationLogger;
use zuschat_store::SessionStore;
use zuschat_types::{ChatRequest, ChatResponse, Message, SessionId};

use crate::state::{reduce, ChatEvent, ChatState, Command};

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or input while a request is in flight
    Ignored,
    /// The conversation was cleared and a new session started
    Reset(SessionId),
    Answered { tool_used: Option<String> },
    Failed(BackendError),
}

/// Drives a conversation: applies events, talks to the backend and keeps
/// storage in step with the in-memory history.
pub struct ChatController {
    state: ChatState,
    store: SessionStore,
    backend: Arc<dyn ChatBackend>,
    deadline: Arc<dyn Deadline>,
    logger: Option<ConversationLogger>,
}

impl ChatController {
    /// Resume the stored session and its history
    pub fn open(store: SessionStore, backend: Arc<dyn ChatBackend>, deadline: Arc<dyn Deadline>) -> Self {
        let history = store.load_history();
        let state = ChatState::new(store.session_id().clone(), history);

        Self {
            state,
            store,
            backend,
            deadline,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: ConversationLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    pub fn history(&self) -> &[Message] {
        &self.state.history
    }

    pub fn session_id(&self) -> &SessionId {
        &self.state.session_id
    }

    pub fn is_sending(&self) -> bool {
        self.state.is_sending()
    }

    pub fn last_tool_used(&self) -> Option<&str> {
        self.state.last_tool_used.as_deref()
    }

    pub fn backend(&self) -> &dyn ChatBackend {
        self.backend.as_ref()
    }

    /// Handle one line of user input end to end
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        match Command::parse(input) {
            Command::Empty => SubmitOutcome::Ignored,
            Command::Reset => match self.reset() {
                Some(session_id) => SubmitOutcome::Reset(session_id),
                None => SubmitOutcome::Ignored,
            },
            Command::Message(text) => {
                let Some(request) = self.begin(&text) else {
                    return SubmitOutcome::Ignored;
                };

                let result = with_deadline(self.deadline.as_ref(), self.backend.send(&request)).await;
                self.complete(result).await
            }
        }
    }

    /// Start an exchange for `text` without interpreting commands.
    ///
    /// Returns the request to send, or `None` if one is already in flight.
    pub fn begin(&mut self, text: &str) -> Option<ChatRequest> {
        if self.is_sending() {
            return None;
        }

        self.apply(ChatEvent::Submit(text.to_string()));
        let request = self.state.in_flight.clone()?;
        self.store.append_and_persist(&self.state.history);
        Some(request)
    }

    /// Settle the in-flight exchange with the backend's result
    pub async fn complete(&mut self, result: Result<ChatResponse, BackendError>) -> SubmitOutcome {
        if !self.is_sending() {
            return SubmitOutcome::Ignored;
        }

        let failure = result.as_ref().err().cloned();
        self.apply(ChatEvent::Settled(result));
        self.store.append_and_persist(&self.state.history);
        self.log_exchange().await;

        let outcome = match failure {
            Some(error) => SubmitOutcome::Failed(error),
            None => SubmitOutcome::Answered {
                tool_used: self.state.last_tool_used.clone(),
            },
        };

        self.apply(ChatEvent::Acknowledge);
        outcome
    }

    /// Clear the conversation and start a new session. `None` while sending.
    pub fn reset(&mut self) -> Option<SessionId> {
        if self.is_sending() {
            return None;
        }

        let session_id = self.store.reset();
        self.apply(ChatEvent::Reset(session_id.clone()));
        Some(session_id)
    }

    /// Flush the conversation log, if any
    pub async fn shutdown(&mut self) {
        if let Some(logger) = self.logger.as_mut() {
            logger.shutdown().await;
        }
    }

    fn apply(&mut self, event: ChatEvent) {
        let placeholder = ChatState::new(self.state.session_id.clone(), Vec::new());
        let state = std::mem::replace(&mut self.state, placeholder);
        self.state = reduce(state, event);
    }

    async fn log_exchange(&mut self) {
        let Some(logger) = self.logger.as_mut() else {
            return;
        };

        let count = self.state.history.len();
        let start = count.saturating_sub(2);
        for message in &self.state.history[start..] {
            logger.log(&self.state.session_id, message).await;
        }
    }
}
