//! Authenticated, time-bounded execution of bank API calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tracing::{debug, warn};

use super::session_context::SessionContext;
use crate::domain::entities::AuthToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::BankApiPort;

/// Default upper bound for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Runs bank API calls on behalf of screen controllers.
///
/// Every call reads the token from the shared [`SessionContext`] at the moment
/// it runs and fails with [`ApiError::Unauthenticated`] when none is present.
#[derive(Clone)]
pub struct FetchRunner {
    api: Arc<dyn BankApiPort>,
    session: SessionContext,
    timeout: Duration,
}

impl FetchRunner {
    #[must_use]
    pub fn new(api: Arc<dyn BankApiPort>, session: SessionContext) -> Self {
        Self {
            api,
            session,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn BankApiPort> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub const fn session(&self) -> &SessionContext {
        &self.session
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds a future that calls `call` with the current token.
    pub fn authorized<T, F, Fut>(&self, call: F) -> BoxFuture<'static, Result<T, ApiError>>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn BankApiPort>, AuthToken) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let api = self.api();
        let session = self.session.clone();
        let timeout = self.timeout;

        Box::pin(async move {
            let token = session.require_token()?;
            bounded(timeout, call(api, token)).await
        })
    }

    /// Builds a future that calls `call` without a token.
    pub fn anonymous<T, F, Fut>(&self, call: F) -> BoxFuture<'static, Result<T, ApiError>>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn BankApiPort>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let api = self.api();
        let timeout = self.timeout;
        Box::pin(async move { bounded(timeout, call(api)).await })
    }
}

/// Fails with [`ApiError::Timeout`] if `future` does not finish within `limit`.
///
/// # Errors
/// Returns the inner error or a timeout.
pub async fn bounded<T, Fut>(limit: Duration, future: Fut) -> Result<T, ApiError>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    if let Ok(result) = tokio::time::timeout(limit, future).await {
        if let Err(e) = &result {
            debug!(error = %e, "Bank API call failed");
        }
        result
    } else {
        warn!(seconds = limit.as_secs(), "Bank API call timed out");
        Err(ApiError::Timeout {
            seconds: limit.as_secs(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockBankApiPort, MockSessionStorage};
    use rust_decimal::Decimal;

    async fn runner_with(api: MockBankApiPort, storage: MockSessionStorage) -> FetchRunner {
        let session = SessionContext::new(Arc::new(storage));
        session.restore().await;
        FetchRunner::new(Arc::new(api), session)
    }

    #[tokio::test]
    async fn test_authorized_passes_current_token() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .withf(|token| token.as_str() == "abc")
            .returning(|_| Ok(Decimal::from(100)));

        let runner = runner_with(api, MockSessionStorage::with_session("abc", "ana")).await;
        let balance = runner
            .authorized(|api, token| async move { api.fetch_balance(&token).await })
            .await;

        assert_eq!(balance, Ok(Decimal::from(100)));
    }

    #[tokio::test]
    async fn test_missing_token_skips_call() {
        let api = MockBankApiPort::new();
        let runner = runner_with(api, MockSessionStorage::new()).await;

        let result = runner
            .authorized(|api, token| async move { api.fetch_balance(&token).await })
            .await;

        assert_eq!(result, Err(ApiError::Unauthenticated));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_produces_error() {
        let result: Result<(), ApiError> = bounded(Duration::from_secs(15), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert_eq!(result, Err(ApiError::Timeout { seconds: 15 }));
    }
}
