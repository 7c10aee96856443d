//! Startup session resolution.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::dto::{ResolvedSession, SessionSource};
use crate::domain::entities::{AuthToken, Session};
use crate::domain::errors::StorageError;
use crate::domain::ports::SessionStoragePort;

/// Finds a session to start with so a returning user skips the login screen.
pub struct ResolveSessionUseCase {
    storage: Arc<dyn SessionStoragePort>,
}

impl ResolveSessionUseCase {
    #[must_use]
    pub const fn new(storage: Arc<dyn SessionStoragePort>) -> Self {
        Self { storage }
    }

    /// Resolves a session from storage or the command line.
    ///
    /// Priority:
    /// 1. Session storage
    /// 2. CLI/Env token, paired with the stored nickname if any
    ///
    /// # Errors
    /// Returns error if storage access fails.
    pub async fn execute(
        &self,
        cli_token: Option<String>,
    ) -> Result<Option<ResolvedSession>, StorageError> {
        debug!("Checking session storage");
        let stored = self.storage.load_session().await?;

        if stored.is_authenticated() {
            info!("Using persisted session");
            return Ok(Some(ResolvedSession {
                session: stored,
                source: SessionSource::Storage,
            }));
        }

        if let Some(token) = cli_token.and_then(AuthToken::new) {
            info!("Using token from command line / environment");
            return Ok(Some(ResolvedSession {
                session: Session::new(Some(token), stored.nickname().map(str::to_string)),
                source: SessionSource::CommandLine,
            }));
        }

        debug!("No session found in any source");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionStorage;

    #[tokio::test]
    async fn test_storage_priority() {
        let storage = Arc::new(MockSessionStorage::with_session("stored", "ana"));
        let use_case = ResolveSessionUseCase::new(storage);

        let resolved = use_case
            .execute(Some("cli-token".to_string()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(resolved.source, SessionSource::Storage);
        assert_eq!(resolved.session.token().unwrap().as_str(), "stored");
    }

    #[tokio::test]
    async fn test_cli_fallback() {
        let use_case = ResolveSessionUseCase::new(Arc::new(MockSessionStorage::new()));

        let resolved = use_case
            .execute(Some("cli-token".to_string()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(resolved.source, SessionSource::CommandLine);
        assert_eq!(resolved.session.display_nickname(), "Visitante");
    }

    #[tokio::test]
    async fn test_blank_cli_token_ignored() {
        let use_case = ResolveSessionUseCase::new(Arc::new(MockSessionStorage::new()));

        let resolved = use_case.execute(Some("   ".to_string())).await.unwrap();

        assert!(resolved.is_none());
    }
}
