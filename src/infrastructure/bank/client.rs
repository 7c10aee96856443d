//! MockBank HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    AccountResponse, BalanceResponse, ErrorResponse, LoginBody, LoginResponse, ProfileResponse,
    ProfileUpdateBody, RegisterBody, SummaryResponse, TransactionResponse, TransferBody,
};
use crate::domain::entities::{
    Account, AuthToken, FinancialSummary, Profile, ProfileUpdate, Transaction,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::{BankApiPort, Credentials, NewTransfer, Registration};

/// Backend origin used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://mock-bank-mock-back.yexuz7.easypanel.host";

const USER_AGENT: &str = concat!("mockbank/", env!("CARGO_PKG_VERSION"));

/// Bank API client over `reqwest`.
pub struct BankApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl BankApiClient {
    /// Creates client for `base_url` with a per-request `timeout`.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::connection(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// Creates client for the default backend.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_default_url(timeout: Duration) -> Result<Self, ApiError> {
        Self::new(DEFAULT_BASE_URL, timeout)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&AuthToken>) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let builder = self.client.request(method, url);

        match token {
            Some(token) => builder.header(header::AUTHORIZATION, token.bearer()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, path: &str) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            warn!(path, error = %e, "Failed to reach bank API");
            if e.is_timeout() {
                ApiError::Timeout {
                    seconds: self.timeout.as_secs(),
                }
            } else {
                ApiError::connection(e.to_string())
            }
        })?;

        let status = response.status();
        debug!(path, status = status.as_u16(), "Bank API responded");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::CONFLICT => ApiError::conflict(message),
            _ => ApiError::server(status.as_u16(), message),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            warn!(path, error = %e, "Failed to parse bank API response");
            ApiError::decode(e.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, token: &AuthToken) -> Result<T, ApiError> {
        let response = self
            .send(self.request(Method::GET, path, Some(token)), path)
            .await?;
        Self::decode(response, path).await
    }

    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        token: Option<&AuthToken>,
        body: &B,
    ) -> Result<Response, ApiError> {
        self.send(self.request(method, path, token).json(body), path)
            .await
    }

    async fn get_transactions(
        &self,
        path: &str,
        token: &AuthToken,
    ) -> Result<Vec<Transaction>, ApiError> {
        let items: Vec<serde_json::Value> = self.get(path, token).await?;
        let total = items.len();

        let transactions: Vec<Transaction> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| {
                let parsed = serde_json::from_value::<TransactionResponse>(item)
                    .map_err(|e| ApiError::decode(e.to_string()))
                    .and_then(TransactionResponse::into_transaction);
                parsed
                    .inspect_err(|e| warn!(path, index, error = %e, "Skipping unreadable transaction"))
                    .ok()
            })
            .collect();

        if transactions.len() < total {
            debug!(path, kept = transactions.len(), total, "Dropped irregular transactions");
        }
        Ok(transactions)
    }
}

#[async_trait]
impl BankApiPort for BankApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, ApiError> {
        debug!(nickname = %credentials.nickname, "Logging in");

        let response = self
            .send_json(Method::POST, "/auth/login", None, &LoginBody::from(credentials))
            .await?;
        let body: LoginResponse = Self::decode(response, "/auth/login").await?;

        body.token
            .and_then(AuthToken::new)
            .ok_or_else(|| ApiError::decode("login response without token"))
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        debug!(nickname = %registration.nickname, "Creating account");

        self.send_json(Method::POST, "/contas", None, &RegisterBody::from(registration))
            .await
            .map(|_| ())
    }

    async fn fetch_profile(&self, token: &AuthToken) -> Result<Profile, ApiError> {
        let body: ProfileResponse = self.get("/contas/perfil", token).await?;
        Ok(body.into())
    }

    async fn update_profile(
        &self,
        token: &AuthToken,
        update: &ProfileUpdate,
    ) -> Result<(), ApiError> {
        self.send_json(
            Method::PUT,
            "/contas/perfil",
            Some(token),
            &ProfileUpdateBody::from(update),
        )
        .await
        .map(|_| ())
    }

    async fn fetch_accounts(&self, token: &AuthToken) -> Result<Vec<Account>, ApiError> {
        let items: Vec<AccountResponse> = self.get("/contas", token).await?;
        Ok(items.into_iter().map(Account::from).collect())
    }

    async fn fetch_balance(&self, token: &AuthToken) -> Result<Decimal, ApiError> {
        let body: BalanceResponse = self.get("/contas/saldo", token).await?;
        Ok(body.saldo)
    }

    async fn fetch_statement(&self, token: &AuthToken) -> Result<Vec<Transaction>, ApiError> {
        self.get_transactions("/contas/extrato?tipo=todas", token)
            .await
    }

    async fn fetch_summary(&self, token: &AuthToken) -> Result<FinancialSummary, ApiError> {
        let body: SummaryResponse = self.get("/contas/resumo-transacoes", token).await?;
        Ok(body.into())
    }

    async fn create_transfer(
        &self,
        token: &AuthToken,
        transfer: &NewTransfer,
    ) -> Result<(), ApiError> {
        debug!(destination = %transfer.destination, "Sending transfer");

        self.send_json(
            Method::POST,
            "/transferencias",
            Some(token),
            &TransferBody::from(transfer),
        )
        .await
        .map(|_| ())
    }

    async fn fetch_transfers(&self, token: &AuthToken) -> Result<Vec<Transaction>, ApiError> {
        self.get_transactions("/transferencias?tipo=todas", token)
            .await
    }
}
