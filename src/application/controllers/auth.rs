//! Login and registration controllers.

use tracing::{debug, info};

use super::{Controller, Effect, FetchOutcome, PendingFetch, unexpected};
use crate::application::dto::{LoginRequest, RegisterForm};
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::application::notice::Notice;
use crate::application::use_cases::{INVALID_CREDENTIALS, LoginUseCase, RegisterUseCase};
use crate::domain::errors::ApiError;

/// Message shown after an account is created.
pub const REGISTERED: &str = "Conta criada com sucesso! Faça login para continuar.";

const REGISTER_FAILED: &str = "Erro ao criar conta.";

/// Login screen state.
#[derive(Debug, Default)]
pub struct LoginController {
    submitting: bool,
    error: Option<String>,
}

impl LoginController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates and starts a login. Ignored while one is in flight.
    ///
    /// # Errors
    /// Returns a notice for blank fields; nothing is sent in that case.
    pub fn submit(
        &mut self,
        runner: &FetchRunner,
        request: LoginRequest,
    ) -> Result<Option<PendingFetch>, Notice> {
        if self.submitting {
            return Ok(None);
        }
        LoginUseCase::validate(&request).map_err(|e| Notice::from(&e))?;

        self.submitting = true;
        self.error = None;

        let use_case = LoginUseCase::new(runner.clone());
        Ok(Some(Box::pin(async move {
            FetchOutcome::LoggedIn(use_case.execute(request).await)
        })))
    }
}

impl Controller for LoginController {
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        let FetchOutcome::LoggedIn(result) = outcome else {
            return unexpected("login", &outcome);
        };
        self.submitting = false;

        match result {
            Ok(response) => {
                info!(nickname = %response.nickname, "Login complete");
                Effect::navigate(Route::Home)
            }
            Err(e) => {
                let message = match e {
                    ApiError::Unauthorized => INVALID_CREDENTIALS.to_string(),
                    other => other.user_message(INVALID_CREDENTIALS),
                };
                self.error = Some(message.clone());
                Effect::Notify(Notice::error("Erro", message))
            }
        }
    }
}

/// Registration screen state.
#[derive(Debug, Default)]
pub struct RegisterController {
    confirm_password: bool,
    submitting: bool,
}

impl RegisterController {
    /// Creates controller; `confirm_password` enables the confirmation field.
    #[must_use]
    pub const fn new(confirm_password: bool) -> Self {
        Self {
            confirm_password,
            submitting: false,
        }
    }

    #[must_use]
    pub const fn confirm_password(&self) -> bool {
        self.confirm_password
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validates and submits the form. Ignored while a submission is in flight.
    ///
    /// # Errors
    /// Returns a notice for the first violated rule; nothing is sent in that case.
    pub fn submit(
        &mut self,
        runner: &FetchRunner,
        mut form: RegisterForm,
    ) -> Result<Option<PendingFetch>, Notice> {
        if self.submitting {
            return Ok(None);
        }
        if !self.confirm_password {
            form.confirmation = None;
        }
        RegisterUseCase::validate(&form).map_err(|e| Notice::from(&e))?;

        self.submitting = true;
        debug!("Submitting registration");

        let use_case = RegisterUseCase::new(runner.clone());
        Ok(Some(Box::pin(async move {
            FetchOutcome::Registered(use_case.execute(form).await)
        })))
    }
}

impl Controller for RegisterController {
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        let FetchOutcome::Registered(result) = outcome else {
            return unexpected("register", &outcome);
        };
        self.submitting = false;

        match result {
            Ok(()) => Effect::Navigate {
                route: Route::Login,
                notice: Some(Notice::success("Sucesso", REGISTERED)),
            },
            Err(e) => Effect::Notify(Notice::from_api_error(&e, REGISTER_FAILED)),
        }
    }
}
