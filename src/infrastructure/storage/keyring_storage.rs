//! Keyring-based session storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

const KEYRING_SERVICE: &str = "mockbank";
const TOKEN_KEY: &str = "token";
const NICKNAME_KEY: &str = "apelido";

/// System keyring session storage adapter.
///
/// Token and nickname are two independent keyring entries.
pub struct KeyringSessionStorage {
    service: String,
}

impl KeyringSessionStorage {
    /// Creates new storage with the default service name.
    #[must_use]
    pub fn new() -> Self {
        Self::with_service(KEYRING_SERVICE)
    }

    /// Creates storage under a custom service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, StorageError> {
        Entry::new(&self.service, key)
            .map_err(|e| StorageError::AccessFailed(format!("failed to access keyring: {e}")))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => {
                debug!(key, "No value stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read keyring entry");
                Err(StorageError::RetrievalFailed(e.to_string()))
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entry(key)?.set_password(value).map_err(|e| {
            warn!(key, error = %e, "Failed to write keyring entry");
            StorageError::StorageFailed(e.to_string())
        })
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(key, error = %e, "Failed to delete keyring entry");
                Err(StorageError::DeletionFailed(e.to_string()))
            }
        }
    }
}

impl Default for KeyringSessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStoragePort for KeyringSessionStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
        debug!(service = %self.service, "Retrieving token from keyring");
        Ok(self.read(TOKEN_KEY)?.and_then(AuthToken::new))
    }

    async fn get_nickname(&self) -> Result<Option<String>, StorageError> {
        self.read(NICKNAME_KEY)
    }

    async fn set_session(&self, token: &AuthToken, nickname: &str) -> Result<(), StorageError> {
        debug!(service = %self.service, nickname, "Storing session in keyring");

        self.write(TOKEN_KEY, token.as_str())?;
        self.write(NICKNAME_KEY, nickname)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        debug!(service = %self.service, "Clearing session from keyring");

        self.delete(TOKEN_KEY)?;
        self.delete(NICKNAME_KEY)
    }
}
