//! Transfer submission use case.

use rust_decimal::Decimal;
use tracing::info;

use crate::application::dto::{DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, TransferForm};
use crate::application::fetch::FetchRunner;
use crate::application::services::format_brl;
use crate::domain::errors::{ApiError, ValidationError};
use crate::domain::ports::NewTransfer;
use crate::domain::validation;

const MISSING_TRANSFER_FIELDS: &str = "Informe o apelido do destinatário e o valor.";

/// Message shown after the backend accepts a transfer.
pub const TRANSFER_SUCCESS: &str = "Transferência realizada com sucesso!";

/// Message shown when the backend rejects a transfer without a reason.
pub const TRANSFER_FAILED: &str = "Erro ao enviar transferência.";

/// Guards and submits a transfer order.
#[derive(Clone)]
pub struct TransferUseCase {
    runner: FetchRunner,
}

impl TransferUseCase {
    #[must_use]
    pub const fn new(runner: FetchRunner) -> Self {
        Self { runner }
    }

    /// Applies every client-side rule against the last fetched `balance`.
    ///
    /// # Errors
    /// Returns the first violated rule. No request is made in that case.
    pub fn validate(
        form: &TransferForm,
        balance: Option<Decimal>,
    ) -> Result<NewTransfer, ValidationError> {
        validation::require_filled(
            &[form.destination.as_str(), form.amount.as_str()],
            MISSING_TRANSFER_FIELDS,
        )?;

        let amount = validation::parse_amount(&form.amount)?;
        validation::check_transfer_amount(amount, balance, format_brl)?;

        let description = match form.description.trim() {
            "" => DEFAULT_DESCRIPTION.to_string(),
            text => text.to_string(),
        };
        let category = match form.category.trim() {
            "" => DEFAULT_CATEGORY.to_string(),
            text => text.to_string(),
        };

        Ok(NewTransfer {
            destination: form.destination.trim().to_string(),
            amount,
            description,
            category,
        })
    }

    /// Sends an already validated transfer.
    ///
    /// # Errors
    /// Returns error if the backend rejects the order.
    pub async fn execute(&self, transfer: NewTransfer) -> Result<(), ApiError> {
        let destination = transfer.destination.clone();
        let amount = transfer.amount;

        self.runner
            .authorized(move |api, token| async move {
                api.create_transfer(&token, &transfer).await
            })
            .await?;

        info!(destination = %destination, amount = %amount, "Transfer created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::application::session_context::SessionContext;
    use crate::domain::ports::mocks::{MockBankApiPort, MockSessionStorage};

    fn form(amount: &str) -> TransferForm {
        TransferForm {
            destination: "bia".to_string(),
            amount: amount.to_string(),
            ..TransferForm::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let transfer = TransferUseCase::validate(&form("10,50"), Some(Decimal::from(100))).unwrap();

        assert_eq!(transfer.amount, Decimal::new(1_050, 2));
        assert_eq!(transfer.description, "Transferência");
        assert_eq!(transfer.category, "Outros");
    }

    #[test]
    fn test_amount_above_balance_rejected() {
        let err = TransferUseCase::validate(&form("150"), Some(Decimal::from(100))).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InsufficientBalance {
                balance: "R$ 100,00".to_string()
            }
        );
    }

    #[test]
    fn test_balance_not_loaded() {
        let err = TransferUseCase::validate(&form("1"), None).unwrap_err();
        assert_eq!(err, ValidationError::BalanceUnavailable);
    }

    #[test]
    fn test_amount_equal_to_balance_accepted() {
        assert!(TransferUseCase::validate(&form("100"), Some(Decimal::from(100))).is_ok());
    }

    #[tokio::test]
    async fn test_execute_sends_order() {
        let mut api = MockBankApiPort::new();
        api.expect_create_transfer()
            .withf(|token, t| token.as_str() == "abc" && t.destination == "bia")
            .times(1)
            .returning(|_, _| Ok(()));
        let session = SessionContext::new(Arc::new(MockSessionStorage::with_session("abc", "ana")));
        session.restore().await;
        let use_case = TransferUseCase::new(FetchRunner::new(Arc::new(api), session));

        let transfer = TransferUseCase::validate(&form("5"), Some(Decimal::from(10))).unwrap();

        assert!(use_case.execute(transfer).await.is_ok());
    }
}
