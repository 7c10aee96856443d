//! Statement screen controller.

use rust_decimal::Decimal;

use super::{
    BALANCE_ERROR, Controller, Effect, FetchOutcome, PendingFetch, fetch_balance,
    fetch_statement, settle, settle_feed, unexpected,
};
use crate::application::feed::PaginatedFeed;
use crate::application::fetch::FetchRunner;
use crate::application::request_slot::RequestSlot;
use crate::domain::LoadState;
use crate::domain::entities::Transaction;

const STATEMENT_ERROR: &str = "Erro ao carregar informações";

/// Balance card plus the paginated transaction feed.
///
/// The two slots load independently; a failure of one never touches the other.
#[derive(Debug, Default)]
pub struct StatementController {
    balance: RequestSlot<Decimal>,
    feed: PaginatedFeed<Transaction>,
}

impl StatementController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches balance and statement, replacing the feed with page 1.
    pub fn refresh(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        let balance_ticket = self.balance.begin();
        let feed_ticket = self.feed.begin_refresh();
        vec![
            fetch_balance(runner, balance_ticket),
            fetch_statement(runner, feed_ticket),
        ]
    }

    /// Reveals the next page. Never issues a request.
    pub fn load_more(&mut self) -> bool {
        self.feed.load_more()
    }

    #[must_use]
    pub const fn balance(&self) -> &LoadState<Decimal> {
        self.balance.state()
    }

    #[must_use]
    pub const fn feed(&self) -> &PaginatedFeed<Transaction> {
        &self.feed
    }
}

impl Controller for StatementController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        let balance_ticket = self.balance.begin();
        let feed_ticket = self.feed.begin_load();
        vec![
            fetch_balance(runner, balance_ticket),
            fetch_statement(runner, feed_ticket),
        ]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Balance { ticket, result } => {
                settle(&mut self.balance, ticket, result, BALANCE_ERROR)
            }
            FetchOutcome::Statement { ticket, result } => {
                settle_feed(&mut self.feed, ticket, result, STATEMENT_ERROR)
            }
            other => unexpected("statement", &other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{TimeZone, Utc};

    use crate::application::controllers::testing::signed_in_runner;
    use crate::domain::entities::TransferKind;
    use crate::domain::errors::ApiError;
    use crate::domain::ports::mocks::MockBankApiPort;

    fn history(n: u64) -> Vec<Transaction> {
        (0..n)
            .map(|i| {
                let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
                Transaction::new(TransferKind::Sent, format!("tx {i}"), Decimal::ONE, timestamp)
                    .with_id(i)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_network_failure_isolated_from_balance() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::from(50)));
        api.expect_fetch_statement()
            .returning(|_| Err(ApiError::connection("connection refused")));
        let runner = signed_in_runner(api).await;
        let mut controller = StatementController::new();

        let mut pending = controller.mount(&runner);
        let statement = pending.pop().unwrap();

        controller.apply(statement.await);
        assert!(matches!(controller.feed().status(), LoadState::Failed(ref m) if !m.is_empty()));
        assert!(controller.balance().is_loading());

        let balance = pending.pop().unwrap();
        controller.apply(balance.await);
        assert_eq!(controller.balance().value(), Some(&Decimal::from(50)));
        assert!(controller.feed().error().is_some());
    }

    #[tokio::test]
    async fn test_pagination_and_refresh() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance().returning(|_| Ok(Decimal::ONE));
        api.expect_fetch_statement()
            .times(2)
            .returning(|_| Ok(history(25)));
        let runner = signed_in_runner(api).await;
        let mut controller = StatementController::new();

        for fetch in controller.mount(&runner) {
            controller.apply(fetch.await);
        }
        assert_eq!(controller.feed().items().len(), 10);

        assert!(controller.load_more());
        assert!(controller.load_more());
        assert_eq!(controller.feed().items().len(), 25);

        for fetch in controller.refresh(&runner) {
            controller.apply(fetch.await);
        }
        assert_eq!(controller.feed().items().len(), 10);
        assert_eq!(controller.feed().page(), 1);
    }

    #[tokio::test]
    async fn test_stale_statement_discarded() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance().returning(|_| Ok(Decimal::ONE));
        let calls = AtomicUsize::new(0);
        api.expect_fetch_statement().returning(move |_| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(history(3))
            } else {
                Ok(history(12))
            }
        });
        let runner = signed_in_runner(api).await;
        let mut controller = StatementController::new();

        let first = controller.mount(&runner);
        let second = controller.refresh(&runner);

        for fetch in second {
            controller.apply(fetch.await);
        }
        for fetch in first {
            controller.apply(fetch.await);
        }

        assert_eq!(controller.feed().total(), 3);
    }
}
