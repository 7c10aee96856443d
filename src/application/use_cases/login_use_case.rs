//! Login use case implementation.

use tracing::{debug, error, info, warn};

use crate::application::dto::{LoginRequest, LoginResponse};
use crate::application::fetch::FetchRunner;
use crate::domain::entities::Session;
use crate::domain::errors::{ApiError, ValidationError};
use crate::domain::ports::Credentials;
use crate::domain::validation;

const MISSING_CREDENTIALS: &str = "Preencha apelido e senha.";

/// Message shown when the backend rejects the credentials without a reason.
pub const INVALID_CREDENTIALS: &str = "Apelido ou senha inválidos";

/// Exchanges credentials for a token and starts the session.
#[derive(Clone)]
pub struct LoginUseCase {
    runner: FetchRunner,
}

impl LoginUseCase {
    #[must_use]
    pub const fn new(runner: FetchRunner) -> Self {
        Self { runner }
    }

    /// Checks that both fields are filled.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingFields`] otherwise.
    pub fn validate(request: &LoginRequest) -> Result<(), ValidationError> {
        validation::require_filled(
            &[request.nickname.as_str(), request.password.as_str()],
            MISSING_CREDENTIALS,
        )
    }

    /// Executes login with provided request.
    ///
    /// The session is started with the typed nickname. If it cannot be
    /// persisted it still applies to this run.
    ///
    /// # Errors
    /// Returns error if a field is blank or the backend rejects the login.
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        Self::validate(&request)?;
        let nickname = request.nickname.trim().to_string();

        debug!(nickname = %nickname, "Attempting login");

        let credentials = Credentials {
            nickname: nickname.clone(),
            password: request.password,
        };
        let token = self
            .runner
            .anonymous(move |api| async move { api.login(&credentials).await })
            .await
            .map_err(|e| {
                warn!(error = %e, "Login rejected");
                e
            })?;

        let session = self.runner.session();
        let persisted = match session.login(token.clone(), &nickname).await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to persist session");
                session.adopt(Session::authenticated(token, nickname.clone()));
                false
            }
        };

        info!(nickname = %nickname, persisted, "Successfully authenticated");
        Ok(LoginResponse {
            nickname,
            persisted,
        })
    }
}
