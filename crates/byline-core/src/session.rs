//! Durable session-token storage.
//!
//! Stores the bearer token in `<home>/session.json` with restricted
//! permissions (0600). Tokens are never logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// On-disk shape of the session file.
#[derive(Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

/// The single process-wide credential store: one bearer token, present or not.
pub struct SessionStore {
    path: PathBuf,
    token: Option<String>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("token", &self.token.as_ref().map(|_| "REDACTED"))
            .finish()
    }
}

impl SessionStore {
    /// Loads the session from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(paths::session_path())
    }

    /// Loads the session from a specific path.
    /// Returns an empty store if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self { path, token: None });
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        let file: SessionFile = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;

        Ok(Self {
            path,
            token: Some(file.token),
        })
    }

    /// Returns the stored bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Stores a new token and persists it to disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written; the in-memory token is
    /// left unchanged in that case.
    pub fn set_token(&mut self, token: String) -> Result<()> {
        self.persist(&token)?;
        self.token = Some(token);
        Ok(())
    }

    /// Removes the token from memory and from disk.
    ///
    /// # Errors
    /// Returns an error if the session file exists but cannot be removed.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove session at {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Writes the session file with restricted permissions (0600).
    fn persist(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(&SessionFile {
            token: token.to_string(),
        })
        .context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("session.json")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = SessionStore::load_from(session_path(&dir)).unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_set_token_persists_across_loads() {
        let dir = tempfile::TempDir::new().unwrap();

        let mut store = SessionStore::load_from(session_path(&dir)).unwrap();
        store.set_token("abc123".to_string()).unwrap();
        assert_eq!(store.token(), Some("abc123"));

        let reloaded = SessionStore::load_from(session_path(&dir)).unwrap();
        assert_eq!(reloaded.token(), Some("abc123"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::TempDir::new().unwrap();

        let mut store = SessionStore::load_from(session_path(&dir)).unwrap();
        store.set_token("abc123".to_string()).unwrap();
        store.clear().unwrap();

        assert!(store.token().is_none());
        assert!(!session_path(&dir).exists());
    }

    #[test]
    fn test_clear_on_empty_store_is_ok() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = SessionStore::load_from(session_path(&dir)).unwrap();
        store.clear().unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = SessionStore::load_from(session_path(&dir)).unwrap();
        store.set_token("super-secret".to_string()).unwrap();

        let rendered = format!("{store:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let mut store = SessionStore::load_from(session_path(&dir)).unwrap();
        store.set_token("abc123".to_string()).unwrap();

        let mode = fs::metadata(session_path(&dir)).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
