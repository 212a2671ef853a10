//! libSQL session store — durable `SessionStore` backend.
//!
//! Supports local file and in-memory databases. Sequence columns are
//! stored as JSON arrays; `created_at` is stamped by SQLite at write time.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libsql::{Connection, Database, params};
use tracing::info;

use crate::error::StoreError;
use crate::store::{SessionRecord, SessionStore, StoredSession};

/// libSQL-backed session store.
///
/// Holds a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlStore {
    #[allow(dead_code)]
    db: Arc<Database>,
    conn: Connection,
}

impl LibSqlStore {
    /// Open (or create) a local database file and set up the schema.
    pub async fn new_local(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Open(format!("failed to create store directory: {e}")))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("failed to open database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        info!(path = %path.display(), "Session store opened");
        Ok(store)
    }

    /// Create an in-memory store (for tests).
    pub async fn new_memory() -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("failed to create in-memory database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS sessions (
                    id          TEXT PRIMARY KEY,
                    email       TEXT NOT NULL,
                    questions   TEXT NOT NULL,
                    traits      TEXT NOT NULL,
                    recipients  TEXT NOT NULL,
                    report_link TEXT NOT NULL,
                    created_at  TEXT NOT NULL
                )",
                (),
            )
            .await
            .map_err(|e| StoreError::Open(format!("failed to create schema: {e}")))?;
        Ok(())
    }
}

/// Parse an RFC 3339 or SQLite datetime string into `DateTime<Utc>`.
fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return ndt.and_utc();
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return ndt.and_utc();
    }
    DateTime::<Utc>::MIN_UTC
}

/// Serialize a string sequence to its JSON column representation.
fn seq_to_json(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a JSON array column back into a string sequence.
fn seq_from_json(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn row_to_session(row: &libsql::Row) -> Result<StoredSession, libsql::Error> {
    let id: String = row.get(0)?;
    let email: String = row.get(1)?;
    let questions: String = row.get(2)?;
    let traits: String = row.get(3)?;
    let recipients: String = row.get(4)?;
    let report_link: String = row.get(5)?;
    let created_at: String = row.get(6)?;

    Ok(StoredSession {
        id,
        record: SessionRecord {
            email,
            questions: seq_from_json(&questions),
            traits: seq_from_json(&traits),
            recipients: seq_from_json(&recipients),
            report_link,
        },
        created_at: parse_datetime(&created_at),
    })
}

#[async_trait]
impl SessionStore for LibSqlStore {
    async fn save_session(&self, id: &str, record: &SessionRecord) -> Result<(), StoreError> {
        // created_at comes from SQLite, not the caller.
        self.conn
            .execute(
                "INSERT OR REPLACE INTO sessions
                    (id, email, questions, traits, recipients, report_link, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, datetime('now'))",
                params![
                    id,
                    record.email.as_str(),
                    seq_to_json(&record.questions),
                    seq_to_json(&record.traits),
                    seq_to_json(&record.recipients),
                    record.report_link.as_str(),
                ],
            )
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }

    async fn get_session(&self, id: &str) -> Result<Option<StoredSession>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT id, email, questions, traits, recipients, report_link, created_at
                 FROM sessions WHERE id = ?1",
                params![id],
            )
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        match rows
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        {
            Some(row) => {
                let session =
                    row_to_session(&row).map_err(|e| StoreError::Query(e.to_string()))?;
                Ok(Some(session))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SessionRecord {
        SessionRecord {
            email: "e@x.com".into(),
            questions: vec!["Q1".into(), "Q2".into()],
            traits: vec!["T1".into()],
            recipients: vec!["r@x.com".into()],
            report_link: "http://h/report/abc123".into(),
        }
    }

    #[tokio::test]
    async fn save_and_get_roundtrip() {
        let store = LibSqlStore::new_memory().await.unwrap();
        store.save_session("abc123", &sample_record()).await.unwrap();

        let stored = store.get_session("abc123").await.unwrap().unwrap();
        assert_eq!(stored.id, "abc123");
        assert_eq!(stored.record, sample_record());
        assert!(stored.created_at > DateTime::<Utc>::MIN_UTC);
    }

    #[tokio::test]
    async fn missing_session_is_none() {
        let store = LibSqlStore::new_memory().await.unwrap();
        assert!(store.get_session("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_existing_id() {
        let store = LibSqlStore::new_memory().await.unwrap();
        store.save_session("abc123", &sample_record()).await.unwrap();

        let mut updated = sample_record();
        updated.questions = vec!["Q3".into()];
        store.save_session("abc123", &updated).await.unwrap();

        let stored = store.get_session("abc123").await.unwrap().unwrap();
        assert_eq!(stored.record.questions, vec!["Q3".to_string()]);
    }

    #[tokio::test]
    async fn local_file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sessions.db");

        {
            let store = LibSqlStore::new_local(&path).await.unwrap();
            store.save_session("abc123", &sample_record()).await.unwrap();
        }

        let store = LibSqlStore::new_local(&path).await.unwrap();
        let stored = store.get_session("abc123").await.unwrap().unwrap();
        assert_eq!(stored.record, sample_record());
    }

    #[test]
    fn datetime_parsing_tolerates_sqlite_format() {
        assert_ne!(
            parse_datetime("2026-08-29 12:00:00"),
            DateTime::<Utc>::MIN_UTC
        );
        assert_ne!(
            parse_datetime("2026-08-29T12:00:00Z"),
            DateTime::<Utc>::MIN_UTC
        );
        assert_eq!(parse_datetime("garbage"), DateTime::<Utc>::MIN_UTC);
    }
}
