//! Session storage port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Session};
use crate::domain::errors::StorageError;

/// Port for durable session persistence.
///
/// Token and nickname live under independent keys; writes are atomic per key
/// only.
#[async_trait]
pub trait SessionStoragePort: Send + Sync {
    /// Retrieves stored token. Absent when never set.
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Retrieves stored nickname. Absent when never set.
    async fn get_nickname(&self) -> Result<Option<String>, StorageError>;

    /// Stores token and nickname.
    async fn set_session(&self, token: &AuthToken, nickname: &str) -> Result<(), StorageError>;

    /// Removes both entries.
    async fn clear(&self) -> Result<(), StorageError>;

    /// Reads both entries into a session.
    async fn load_session(&self) -> Result<Session, StorageError> {
        let token = self.get_token().await?;
        let nickname = self.get_nickname().await?;
        Ok(Session::new(token, nickname))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// In-memory session storage for testing.
    pub struct MockSessionStorage {
        token: Arc<RwLock<Option<AuthToken>>>,
        nickname: Arc<RwLock<Option<String>>>,
        fail_writes: AtomicBool,
    }

    impl MockSessionStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                token: Arc::new(RwLock::new(None)),
                nickname: Arc::new(RwLock::new(None)),
                fail_writes: AtomicBool::new(false),
            }
        }

        /// Creates mock storage holding a session.
        pub fn with_session(token: &str, nickname: &str) -> Self {
            let storage = Self::new();
            *storage.token.try_write().unwrap() = Some(AuthToken::new_unchecked(token));
            *storage.nickname.try_write().unwrap() = Some(nickname.to_string());
            storage
        }

        /// Makes every write fail.
        pub fn failing_writes() -> Self {
            let storage = Self::new();
            storage.fail_writes.store(true, Ordering::SeqCst);
            storage
        }
    }

    impl Default for MockSessionStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl SessionStoragePort for MockSessionStorage {
        async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
            Ok(self.token.read().await.clone())
        }

        async fn get_nickname(&self) -> Result<Option<String>, StorageError> {
            Ok(self.nickname.read().await.clone())
        }

        async fn set_session(&self, token: &AuthToken, nickname: &str) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::StorageFailed("mock failure".to_string()));
            }
            *self.token.write().await = Some(token.clone());
            *self.nickname.write().await = Some(nickname.to_string());
            Ok(())
        }

        async fn clear(&self) -> Result<(), StorageError> {
            *self.token.write().await = None;
            *self.nickname.write().await = None;
            Ok(())
        }
    }
}
