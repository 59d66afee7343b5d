use zuschat_api::BackendError;
use zuschat_types::{ChatRequest, ChatResponse, Message, SessionId, RESET_COMMAND};

/// Where the conversation is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl Phase {
    pub fn accepts_input(&self) -> bool {
        !matches!(self, Phase::Sending)
    }
}

/// Everything the controller knows about the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    pub phase: Phase,
    pub session_id: SessionId,
    pub history: Vec<Message>,
    pub in_flight: Option<ChatRequest>,
    pub last_tool_used: Option<String>,
}

impl ChatState {
    pub fn new(session_id: SessionId, history: Vec<Message>) -> Self {
        Self {
            phase: Phase::Idle,
            session_id,
            history,
            in_flight: None,
            last_tool_used: None,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// The assistant placeholder awaiting an answer, if any
    pub fn pending_message(&self) -> Option<&Message> {
        self.history.iter().rev().find(|m| m.is_pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Submit(String),
    Reset(SessionId),
    Settled(Result<ChatResponse, BackendError>),
    Acknowledge,
}

/// What a line of user input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Reset,
    Message(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Command::Empty
        } else if trimmed.eq_ignore_ascii_case(RESET_COMMAND) {
            Command::Reset
        } else {
            Command::Message(trimmed.to_string())
        }
    }
}

/// Apply one event to the conversation.
///
/// Events that make no sense in the current phase leave the state untouched.
pub fn reduce(mut state: ChatState, event: ChatEvent) -> ChatState {
    match event {
        ChatEvent::Submit(text) => {
            let text = text.trim();
            if !state.phase.accepts_input() || text.is_empty() {
                return state;
            }

            state.history.push(Message::user(text));
            state.history.push(Message::pending());
            state.in_flight = Some(ChatRequest {
                session_id: state.session_id.to_string(),
                message: text.to_string(),
            });
            state.last_tool_used = None;
            state.phase = Phase::Sending;
        }

        ChatEvent::Reset(session_id) => {
            if !state.phase.accepts_input() {
                return state;
            }

            state = ChatState::new(session_id, Vec::new());
        }

        ChatEvent::Settled(result) => {
            if state.phase != Phase::Sending {
                return state;
            }

            let pending = state.history.iter_mut().rev().find(|m| m.is_pending);
            match result {
                Ok(response) => {
                    if let Some(message) = pending {
                        message.settle(response.answer, response.tool_used.clone());
                    }
                    state.last_tool_used = response.tool_used;
                    state.phase = Phase::Succeeded;
                }
                Err(error) => {
                    if let Some(message) = pending {
                        message.fail(error.diagnostic());
                    }
                    state.phase = Phase::Failed;
                }
            }
            state.in_flight = None;
        }

        ChatEvent::Acknowledge => {
            if matches!(state.phase, Phase::Succeeded | Phase::Failed) {
                state.phase = Phase::Idle;
            }
        }
    }

    state
}
