use std::sync::Arc;

use zuschat_logging::warn;
use zuschat_types::{Message, SessionId, HISTORY_KEY, INTERRUPTED_TEXT, SESSION_KEY};

use crate::{KeyValueStore, StoreError};

/// Session id and message history, mirrored to durable storage.
///
/// Persistence is best-effort: every storage failure is reported as a
/// warning and swallowed, so the in-memory state stays authoritative for
/// the lifetime of the process.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    session_id: SessionId,
}

impl SessionStore {
    /// Open the store, creating (and persisting) a session id if none exists
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let session_id = read_or_create_session(storage.as_ref());
        Self { storage, session_id }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Re-read the stored session id, creating one if it went missing
    pub fn get_or_create_session(&mut self) -> SessionId {
        self.session_id = read_or_create_session(self.storage.as_ref());
        self.session_id.clone()
    }

    /// Load the persisted history.
    ///
    /// Corrupt data is discarded. A message still pending from a previous run
    /// is settled with the interrupted diagnostic.
    pub fn load_history(&self) -> Vec<Message> {
        let raw = match self.storage.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn(&format!("Failed to load chat history: {}", e));
                return Vec::new();
            }
        };

        let mut history: Vec<Message> = match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(source) => {
                let e = StoreError::Corrupt { key: HISTORY_KEY.to_string(), source };
                warn(&format!("Discarding chat history: {}", e));
                self.remove_quietly(HISTORY_KEY);
                return Vec::new();
            }
        };

        for message in history.iter_mut().filter(|m| m.is_pending) {
            message.fail(INTERRUPTED_TEXT.to_string());
        }

        history
    }

    /// Mirror `history` to storage. An empty history clears the stored copy.
    pub fn append_and_persist(&self, history: &[Message]) {
        if history.is_empty() {
            self.remove_quietly(HISTORY_KEY);
            return;
        }

        let result = serde_json::to_string(history)
            .map_err(|source| StoreError::Serialize { key: HISTORY_KEY.to_string(), source })
            .and_then(|json| self.storage.set(HISTORY_KEY, &json));

        if let Err(e) = result {
            warn(&format!("Failed to save chat history: {}", e));
        }
    }

    /// Forget the history and session id, then start (and persist) a new session
    pub fn reset(&mut self) -> SessionId {
        self.remove_quietly(HISTORY_KEY);
        self.remove_quietly(SESSION_KEY);

        let mut fresh = SessionId::generate();
        while fresh == self.session_id {
            fresh = SessionId::generate();
        }

        if let Err(e) = self.storage.set(SESSION_KEY, fresh.as_str()) {
            warn(&format!("Failed to save session id: {}", e));
        }

        self.session_id = fresh.clone();
        fresh
    }

    fn remove_quietly(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn(&format!("Failed to clear stored '{}': {}", key, e));
        }
    }
}

fn read_or_create_session(storage: &dyn KeyValueStore) -> SessionId {
    let existing = match storage.get(SESSION_KEY) {
        Ok(value) => value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
        Err(e) => {
            warn(&format!("Failed to read session id: {}", e));
            None
        }
    };

    let session_id = existing.map(SessionId::from).unwrap_or_else(SessionId::generate);

    if let Err(e) = storage.set(SESSION_KEY, session_id.as_str()) {
        warn(&format!("Failed to save session id: {}", e));
    }

    session_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use pretty_assertions::assert_eq;

    fn settled(content: &str, tool: Option<&str>) -> Message {
        let mut msg = Message::pending();
        msg.settle(content.to_string(), tool.map(str::to_string));
        msg
    }

    #[test]
    fn test_open_creates_and_persists_session() {
        let storage = Arc::new(MemoryStore::new());
        let store = SessionStore::open(storage.clone());

        let stored = storage.get(SESSION_KEY).unwrap();
        assert_eq!(stored.as_deref(), Some(store.session_id().as_str()));
    }

    #[test]
    fn test_open_reuses_existing_session() {
        let storage = Arc::new(MemoryStore::with_entries([(SESSION_KEY, "session_42_abcdefghi")]));
        let mut store = SessionStore::open(storage);
        assert_eq!(store.session_id().as_str(), "session_42_abcdefghi");
        assert_eq!(store.get_or_create_session().as_str(), "session_42_abcdefghi");
    }

    #[test]
    fn test_blank_session_value_is_replaced() {
        let storage = Arc::new(MemoryStore::with_entries([(SESSION_KEY, "   ")]));
        let store = SessionStore::open(storage);
        assert!(store.session_id().as_str().starts_with("session_"));
    }

    #[test]
    fn test_history_roundtrip() {
        let storage = Arc::new(MemoryStore::new());
        let store = SessionStore::open(storage.clone());
        let history = vec![Message::user("2+2"), settled("4", Some("Calculator"))];

        store.append_and_persist(&history);

        let reopened = SessionStore::open(storage);
        assert_eq!(reopened.load_history(), history);
    }

    #[test]
    fn test_pending_message_reloads_as_interrupted() {
        let storage = Arc::new(MemoryStore::new());
        let store = SessionStore::open(storage.clone());
        let history = vec![Message::user("hello"), Message::pending()];
        store.append_and_persist(&history);

        let loaded = SessionStore::open(storage).load_history();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], history[0]);
        assert_eq!(loaded[1].id, history[1].id);
        assert!(!loaded[1].is_pending);
        assert_eq!(loaded[1].content, INTERRUPTED_TEXT);
        assert_eq!(loaded[1].tool_used, None);
    }

    #[test]
    fn test_corrupt_history_is_discarded() {
        let storage = Arc::new(MemoryStore::with_entries([(HISTORY_KEY, "{not json")]));
        let store = SessionStore::open(storage.clone());

        assert!(store.load_history().is_empty());
        assert_eq!(storage.get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn test_empty_history_clears_storage() {
        let storage = Arc::new(MemoryStore::new());
        let store = SessionStore::open(storage.clone());
        store.append_and_persist(&[Message::user("hi")]);
        assert!(storage.get(HISTORY_KEY).unwrap().is_some());

        store.append_and_persist(&[]);
        assert_eq!(storage.get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn test_reset_issues_new_session_and_clears_history() {
        let storage = Arc::new(MemoryStore::new());
        let mut store = SessionStore::open(storage.clone());
        let before = store.session_id().clone();
        store.append_and_persist(&[Message::user("hi")]);

        let after = store.reset();

        assert_ne!(before, after);
        assert_eq!(store.session_id(), &after);
        assert_eq!(storage.get(SESSION_KEY).unwrap().as_deref(), Some(after.as_str()));
        assert_eq!(storage.get(HISTORY_KEY).unwrap(), None);
        assert!(store.load_history().is_empty());
    }
}
