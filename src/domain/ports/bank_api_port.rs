//! Bank API port definition.

use std::fmt;

use async_trait::async_trait;
use rust_decimal::Decimal;
use zeroize::Zeroizing;

use crate::domain::entities::{
    Account, AuthToken, FinancialSummary, Profile, ProfileUpdate, Transaction,
};
use crate::domain::errors::ApiError;

/// Login credentials for `POST /auth/login`.
#[derive(Clone)]
pub struct Credentials {
    pub nickname: String,
    pub password: Zeroizing<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(nickname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("nickname", &self.nickname)
            .field("password", &"***")
            .finish()
    }
}

/// New account data for `POST /contas`.
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub cpf: String,
    pub nickname: String,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("cpf", &self.cpf)
            .field("nickname", &self.nickname)
            .field("password", &"***")
            .finish()
    }
}

/// Transfer order for `POST /transferencias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransfer {
    /// Destination account nickname.
    pub destination: String,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
}

/// Port for the remote banking backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BankApiPort: Send + Sync {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError>;

    /// Creates a new account.
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;

    /// Fetches the signed-in holder's profile.
    async fn fetch_profile(&self, token: &AuthToken) -> Result<Profile, ApiError>;

    /// Replaces the editable profile fields.
    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError>;

    /// Lists the holder's accounts.
    async fn fetch_accounts(&self, token: &AuthToken) -> Result<Vec<Account>, ApiError>;

    /// Fetches the current balance.
    async fn fetch_balance(&self, token: &AuthToken) -> Result<Decimal, ApiError>;

    /// Fetches the full statement history.
    async fn fetch_statement(&self, token: &AuthToken) -> Result<Vec<Transaction>, ApiError>;

    /// Fetches received/sent totals.
    async fn fetch_summary(&self, token: &AuthToken) -> Result<FinancialSummary, ApiError>;

    /// Submits a transfer order.
    async fn create_transfer(
        &self,
        token: &AuthToken,
        transfer: &NewTransfer,
    ) -> Result<(), ApiError>;

    /// Fetches every transfer sent or received.
    async fn fetch_transfers(&self, token: &AuthToken) -> Result<Vec<Transaction>, ApiError>;
}
