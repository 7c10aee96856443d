//! Account registration use case.

use tracing::{info, warn};

use crate::application::dto::RegisterForm;
use crate::application::fetch::FetchRunner;
use crate::domain::errors::{ApiError, ValidationError};
use crate::domain::masks;
use crate::domain::ports::Registration;
use crate::domain::validation;

/// Message shown when the nickname or CPF is already taken.
pub const DUPLICATE_ACCOUNT: &str = "Apelido ou CPF já cadastrado";

/// Creates an account with `POST /contas`.
#[derive(Clone)]
pub struct RegisterUseCase {
    runner: FetchRunner,
}

impl RegisterUseCase {
    #[must_use]
    pub const fn new(runner: FetchRunner) -> Self {
        Self { runner }
    }

    /// Validates the form into a request body without touching the network.
    ///
    /// # Errors
    /// Returns the first violated rule.
    pub fn validate(form: &RegisterForm) -> Result<Registration, ValidationError> {
        validation::require_filled(
            &[
                form.name.as_str(),
                form.cpf.as_str(),
                form.nickname.as_str(),
                form.password.as_str(),
            ],
            ValidationError::REQUIRED_FIELDS,
        )?;

        if let Some(confirmation) = &form.confirmation {
            validation::require_matching_passwords(&form.password, confirmation)?;
        }

        Ok(Registration {
            name: form.name.trim().to_string(),
            cpf: masks::format_cpf(&form.cpf),
            nickname: form.nickname.trim().to_string(),
            password: form.password.clone(),
        })
    }

    /// Submits the form.
    ///
    /// # Errors
    /// Returns validation errors before any request, a conflict carrying
    /// [`DUPLICATE_ACCOUNT`] on HTTP 409, or the backend error otherwise.
    pub async fn execute(&self, form: RegisterForm) -> Result<(), ApiError> {
        let registration = Self::validate(&form)?;
        let nickname = registration.nickname.clone();

        let result = self
            .runner
            .anonymous(move |api| async move { api.register(&registration).await })
            .await;

        match result {
            Ok(()) => {
                info!(nickname = %nickname, "Account registered");
                Ok(())
            }
            Err(ApiError::Conflict { .. }) => {
                warn!(nickname = %nickname, "Nickname or CPF already registered");
                Err(ApiError::conflict(DUPLICATE_ACCOUNT))
            }
            Err(e) => Err(e),
        }
    }
}
