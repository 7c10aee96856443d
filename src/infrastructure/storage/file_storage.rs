//! TOML file session storage.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// File name used inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    apelido: Option<String>,
}

/// Session storage in a plain TOML file.
///
/// Every write replaces the whole file through a temporary file in the same
/// directory, so readers see either the old or the new session.
pub struct FileSessionStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Storage at `dir/session.toml`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(SESSION_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SessionFile, StorageError> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| StorageError::RetrievalFailed(e.to_string()))?;

        match toml::from_str(&content) {
            Ok(file) => Ok(file),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable session file, ignoring");
                Ok(SessionFile::default())
            }
        }
    }

    fn write(&self, file: &SessionFile) -> Result<(), StorageError> {
        let content =
            toml::to_string_pretty(file).map_err(|e| StorageError::StorageFailed(e.to_string()))?;
        let parent = self
            .path
            .parent()
            .ok_or_else(|| StorageError::AccessFailed("invalid session path".to_string()))?;

        fs::create_dir_all(parent).map_err(|e| StorageError::AccessFailed(e.to_string()))?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::StorageFailed(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| StorageError::StorageFailed(e.to_string()))?;
        temp.persist(&self.path)
            .map_err(|e| StorageError::StorageFailed(e.error.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl SessionStoragePort for FileSessionStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read()?.token.and_then(AuthToken::new))
    }

    async fn get_nickname(&self) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read()?.apelido)
    }

    async fn set_session(&self, token: &AuthToken, nickname: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        debug!(path = %self.path.display(), nickname, "Writing session file");

        self.write(&SessionFile {
            token: Some(token.as_str().to_string()),
            apelido: Some(nickname.to_string()),
        })
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        debug!(path = %self.path.display(), "Removing session file");

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::DeletionFailed(e.to_string())),
        }
    }
}
