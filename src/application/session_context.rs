//! Single owner of the client session.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::entities::{AuthToken, Session};
use crate::domain::errors::{ApiError, StorageError};
use crate::domain::ports::SessionStoragePort;

/// Centralizes session reads and writes.
///
/// Screens subscribe to changes instead of re-reading storage on every mount.
/// Writes go to durable storage first and are published afterwards, so a
/// subscriber never observes a session that failed to persist.
#[derive(Clone)]
pub struct SessionContext {
    storage: Arc<dyn SessionStoragePort>,
    current: Arc<watch::Sender<Session>>,
}

impl SessionContext {
    /// Creates context with an empty in-memory session.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStoragePort>) -> Self {
        let (tx, _rx) = watch::channel(Session::anonymous());
        Self {
            storage,
            current: Arc::new(tx),
        }
    }

    /// Loads the persisted session into memory.
    ///
    /// Storage failures degrade to an anonymous session.
    pub async fn restore(&self) -> Session {
        let session = match self.storage.load_session().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted session");
                Session::anonymous()
            }
        };

        debug!(
            authenticated = session.is_authenticated(),
            "Session restored from storage"
        );
        self.current.send_replace(session.clone());
        session
    }

    /// Persists and publishes a new session.
    ///
    /// # Errors
    /// Returns error if the session cannot be persisted.
    pub async fn login(&self, token: AuthToken, nickname: &str) -> Result<(), StorageError> {
        self.storage.set_session(&token, nickname).await?;
        info!(nickname = %nickname, token = %token, "Session started");
        self.current
            .send_replace(Session::authenticated(token, nickname.to_string()));
        Ok(())
    }

    /// Publishes a session for this run without persisting it.
    pub fn adopt(&self, session: Session) {
        debug!(
            authenticated = session.is_authenticated(),
            "Session adopted without persistence"
        );
        self.current.send_replace(session);
    }

    /// Clears persisted and in-memory session.
    ///
    /// The in-memory session is cleared even if storage fails.
    ///
    /// # Errors
    /// Returns error if the persisted entries cannot be removed.
    pub async fn logout(&self) -> Result<(), StorageError> {
        let result = self.storage.clear().await;
        self.current.send_replace(Session::anonymous());

        match &result {
            Ok(()) => info!("Session cleared"),
            Err(e) => warn!(error = %e, "Session cleared in memory only"),
        }
        result
    }

    /// Returns a snapshot of the current session.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.current.borrow().clone()
    }

    /// Returns the current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<AuthToken> {
        self.current.borrow().token().cloned()
    }

    /// Returns the current token or [`ApiError::Unauthenticated`].
    ///
    /// # Errors
    /// Returns error if no token is present.
    pub fn require_token(&self) -> Result<AuthToken, ApiError> {
        self.token().ok_or(ApiError::Unauthenticated)
    }

    /// Subscribes to session changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionStorage;

    #[tokio::test]
    async fn test_restore_reads_storage() {
        let storage = Arc::new(MockSessionStorage::with_session("abc", "ana"));
        let context = SessionContext::new(storage);

        let session = context.restore().await;

        assert!(session.is_authenticated());
        assert_eq!(context.current_session().display_nickname(), "ana");
    }

    #[tokio::test]
    async fn test_login_persists_and_notifies() {
        let storage = Arc::new(MockSessionStorage::new());
        let context = SessionContext::new(storage.clone());
        let mut rx = context.subscribe();

        context
            .login(AuthToken::new_unchecked("abc"), "ana")
            .await
            .unwrap();

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().nickname(), Some("ana"));
        assert_eq!(storage.get_token().await.unwrap().unwrap().as_str(), "abc");
        assert_eq!(storage.get_nickname().await.unwrap().as_deref(), Some("ana"));
    }

    #[tokio::test]
    async fn test_failed_persist_does_not_publish() {
        let storage = Arc::new(MockSessionStorage::failing_writes());
        let context = SessionContext::new(storage);

        let result = context.login(AuthToken::new_unchecked("abc"), "ana").await;

        assert!(result.is_err());
        assert!(!context.current_session().is_authenticated());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let storage = Arc::new(MockSessionStorage::with_session("abc", "ana"));
        let context = SessionContext::new(storage.clone());
        context.restore().await;

        context.logout().await.unwrap();

        assert!(context.token().is_none());
        assert!(storage.get_token().await.unwrap().is_none());
        assert!(matches!(
            context.require_token(),
            Err(ApiError::Unauthenticated)
        ));
    }
}
