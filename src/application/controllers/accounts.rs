//! Accounts list controller.

use super::{Controller, Effect, FetchOutcome, PendingFetch, fetch_accounts, settle, unexpected};
use crate::application::fetch::FetchRunner;
use crate::application::request_slot::RequestSlot;
use crate::domain::LoadState;
use crate::domain::entities::Account;

const ACCOUNTS_ERROR: &str = "Erro ao carregar contas";

#[derive(Debug, Default)]
pub struct AccountsController {
    accounts: RequestSlot<Vec<Account>>,
    selected: usize,
}

impl AccountsController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<Vec<Account>> {
        self.accounts.state()
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let len = self.accounts.value().map_or(0, Vec::len);
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Controller for AccountsController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.selected = 0;
        let ticket = self.accounts.begin();
        vec![fetch_accounts(runner, ticket)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Accounts { ticket, result } => {
                settle(&mut self.accounts, ticket, result, ACCOUNTS_ERROR)
            }
            other => unexpected("accounts", &other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::{drive, signed_in_runner};
    use crate::domain::entities::AccountType;
    use crate::domain::ports::mocks::MockBankApiPort;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_loads_accounts_in_order() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_accounts().returning(|_| {
            Ok(vec![
                Account::new(1, "Principal", "0001-1", Decimal::from(10), AccountType::Checking),
                Account::new(2, "Reserva", "0001-2", Decimal::from(5), AccountType::Savings),
            ])
        });
        let runner = signed_in_runner(api).await;
        let mut controller = AccountsController::new();

        let pending = controller.mount(&runner);
        drive(&mut controller, pending).await;

        let accounts = controller.state().value().unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].name(), "Principal");

        controller.select_next();
        controller.select_next();
        assert_eq!(controller.selected(), 1);
    }
}
