//! Stub keyring storage for builds without keyring support.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// Keyring storage that keeps nothing.
/// Used when the keyring feature is disabled; sessions last one run.
pub struct KeyringSessionStorage;

impl KeyringSessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn with_service(_service: impl Into<String>) -> Self {
        Self
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
        debug!("Keyring feature disabled - no stored token");
        Ok(None)
    }

    async fn get_nickname(&self) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set_session(&self, _token: &AuthToken, _nickname: &str) -> Result<(), StorageError> {
        debug!("Keyring feature disabled - session not persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
