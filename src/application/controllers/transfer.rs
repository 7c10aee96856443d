//! Transfer form controller.

use rust_decimal::Decimal;
use tracing::debug;

use super::{
    BALANCE_ERROR, Controller, Effect, FetchOutcome, PendingFetch, fetch_balance, settle,
    unexpected,
};
use crate::application::dto::TransferForm;
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::application::notice::Notice;
use crate::application::request_slot::RequestSlot;
use crate::application::services::balance_text;
use crate::application::use_cases::{TRANSFER_FAILED, TRANSFER_SUCCESS, TransferUseCase};
use crate::domain::LoadState;

/// Transfer screen: balance card, visibility toggle and the order form.
#[derive(Debug, Default)]
pub struct TransferController {
    balance: RequestSlot<Decimal>,
    balance_visible: bool,
    submitting: bool,
}

impl TransferController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_balance(&mut self) {
        self.balance_visible = !self.balance_visible;
    }

    #[must_use]
    pub const fn balance(&self) -> &LoadState<Decimal> {
        self.balance.state()
    }

    /// Balance card text, `None` until loaded.
    #[must_use]
    pub fn balance_display(&self) -> Option<String> {
        self.balance
            .value()
            .map(|b| balance_text(*b, self.balance_visible))
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Checks the form against the last fetched balance and submits it.
    ///
    /// Ignored while a submission is in flight.
    ///
    /// # Errors
    /// Returns a notice for the first violated rule; nothing is sent in that case.
    pub fn submit(
        &mut self,
        runner: &FetchRunner,
        form: &TransferForm,
    ) -> Result<Option<PendingFetch>, Notice> {
        if self.submitting {
            return Ok(None);
        }

        let transfer = TransferUseCase::validate(form, self.balance.value().copied())
            .map_err(|e| {
                debug!(error = %e, "Transfer blocked by client-side rule");
                Notice::from(&e)
            })?;

        self.submitting = true;
        let use_case = TransferUseCase::new(runner.clone());
        Ok(Some(Box::pin(async move {
            FetchOutcome::TransferSent(use_case.execute(transfer).await)
        })))
    }
}

impl Controller for TransferController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.balance_visible = false;
        let ticket = self.balance.begin();
        vec![fetch_balance(runner, ticket)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Balance { ticket, result } => {
                settle(&mut self.balance, ticket, result, BALANCE_ERROR)
            }
            FetchOutcome::TransferSent(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => Effect::Navigate {
                        route: Route::Statement,
                        notice: Some(Notice::success("Sucesso", TRANSFER_SUCCESS)),
                    },
                    Err(e) if e.requires_login() => Effect::RequireLogin,
                    Err(e) => Effect::Notify(Notice::from_api_error(&e, TRANSFER_FAILED)),
                }
            }
            other => unexpected("transfer", &other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::controllers::testing::{drive, signed_in_runner};
    use crate::domain::ports::mocks::MockBankApiPort;

    fn form(amount: &str) -> TransferForm {
        TransferForm {
            destination: "bia".to_string(),
            amount: amount.to_string(),
            ..TransferForm::default()
        }
    }

    async fn loaded(api: MockBankApiPort) -> (TransferController, FetchRunner) {
        let runner = signed_in_runner(api).await;
        let mut controller = TransferController::new();
        let pending = controller.mount(&runner);
        drive(&mut controller, pending).await;
        (controller, runner)
    }

    #[tokio::test]
    async fn test_amount_above_balance_never_calls_backend() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::from(100)));
        api.expect_create_transfer().never();
        let (mut controller, runner) = loaded(api).await;

        let notice = controller.submit(&runner, &form("100,01")).err().unwrap();

        assert_eq!(notice.title, "Saldo insuficiente");
        assert_eq!(notice.message, "Seu saldo atual é R$ 100,00.");
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_amount_within_balance_is_sent() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::from(100)));
        api.expect_create_transfer()
            .withf(|_, t| t.amount == Decimal::from(100) && t.category == "Outros")
            .times(1)
            .returning(|_, _| Ok(()));
        let (mut controller, runner) = loaded(api).await;

        let pending = controller.submit(&runner, &form("100")).unwrap().unwrap();
        let effects = drive(&mut controller, vec![pending]).await;

        assert!(matches!(
            &effects[..],
            [Effect::Navigate {
                route: Route::Statement,
                notice: Some(_)
            }]
        ));
    }

    #[tokio::test]
    async fn test_submit_before_balance_loads() {
        let mut api = MockBankApiPort::new();
        api.expect_create_transfer().never();
        let runner = signed_in_runner(api).await;
        let mut controller = TransferController::new();

        let notice = controller.submit(&runner, &form("1")).err().unwrap();

        assert_eq!(notice.message, "Carregando saldo...");
    }

    #[tokio::test]
    async fn test_backend_rejection_message() {
        let mut api = MockBankApiPort::new();
        api.expect_fetch_balance()
            .returning(|_| Ok(Decimal::from(100)));
        api.expect_create_transfer()
            .returning(|_, _| Err(crate::domain::errors::ApiError::server(400, "Conta destino inexistente")));
        let (mut controller, runner) = loaded(api).await;

        let pending = controller.submit(&runner, &form("10")).unwrap().unwrap();
        let effects = drive(&mut controller, vec![pending]).await;

        match &effects[..] {
            [Effect::Notify(notice)] => assert_eq!(notice.message, "Conta destino inexistente"),
            other => panic!("unexpected effects: {other:?}"),
        }
    }
}
