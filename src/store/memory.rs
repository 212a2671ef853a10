//! In-memory session store — for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::StoreError;
use crate::store::{SessionRecord, SessionStore, StoredSession};

/// Session store backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<String, StoredSession>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub fn len(&self) -> usize {
        self.sessions.lock().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn save_session(&self, id: &str, record: &SessionRecord) -> Result<(), StoreError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| StoreError::Write("session map poisoned".into()))?;
        sessions.insert(
            id.to_string(),
            StoredSession {
                id: id.to_string(),
                record: record.clone(),
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn get_session(&self, id: &str) -> Result<Option<StoredSession>, StoreError> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|_| StoreError::Query("session map poisoned".into()))?;
        Ok(sessions.get(id).cloned())
    }
}
