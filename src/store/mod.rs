//! Session cache store — best-effort persistence of created interviews.
//!
//! The store is a convenience cache for later lookup, never authoritative
//! for whether creation succeeded. The pipeline writes through the
//! `SessionStore` trait so tests can substitute a fake and assert the
//! best-effort failure behavior without a real backend.

pub mod libsql;
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub use self::libsql::LibSqlStore;
pub use self::memory::MemoryStore;

/// Denormalized copy of a submission, written under the interview id.
///
/// Carries the raw draft email plus the normalized sequences that were
/// actually sent, mirroring what the confirmation view needs later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub email: String,
    pub questions: Vec<String>,
    pub traits: Vec<String>,
    pub recipients: Vec<String>,
    pub report_link: String,
}

/// A record read back from the store, with the store-assigned timestamp.
#[derive(Debug, Clone)]
pub struct StoredSession {
    pub id: String,
    pub record: SessionRecord,
    /// Assigned by the store at write time, never by the client.
    pub created_at: DateTime<Utc>,
}

/// Backend-agnostic session store.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Write a session record under `id`, stamping `created_at` at the
    /// store. Overwrites any existing record with the same id.
    async fn save_session(&self, id: &str, record: &SessionRecord) -> Result<(), StoreError>;

    /// Look up a session by interview id.
    async fn get_session(&self, id: &str) -> Result<Option<StoredSession>, StoreError>;
}
