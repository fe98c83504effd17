//! Persisted session storage
//!
//! The session token survives restarts in a single JSON file. A missing file
//! means "never paired"; an unreadable one is surfaced as an error the login
//! flow downgrades to re-pairing.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, WhatsAppError};
use crate::types::Session;

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store persisting to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the stored session, `None` when no file exists
    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            debug!("No session file at {}", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)?;
        let session: Session = serde_json::from_str(&content)
            .map_err(|e| WhatsAppError::Session(format!("corrupt session file: {}", e)))?;

        Ok(Some(session))
    }

    /// Persist the session, atomically replacing any previous file
    pub fn save(&self, session: &Session) -> Result<()> {
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| WhatsAppError::Session(e.to_string()))?;

        // Write next to the target, then rename into place.
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!("Session saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            client_id: "client-1".to_string(),
            client_token: "ct".to_string(),
            server_token: "st".to_string(),
            enc_key: "ZW5j".to_string(),
            mac_key: "bWFj".to_string(),
            wid: "491234567890@c.us".to_string(),
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let session = sample_session();
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("does-not-exist.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_is_session_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = SessionStore::new(&path);
        let err = store.load().unwrap_err();
        assert!(matches!(err, WhatsAppError::Session(_)));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        let mut session = sample_session();
        store.save(&session).unwrap();

        session.server_token = "st-rotated".to_string();
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.server_token, "st-rotated");
    }
}
