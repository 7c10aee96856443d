//! UI-agnostic screen controllers.
//!
//! A controller owns the view state of one screen. It never awaits anything
//! itself: operations that need the network return [`PendingFetch`] futures
//! which the caller spawns, and their [`FetchOutcome`] is handed back through
//! [`Controller::apply`]. Each outcome carries the ticket issued when the
//! request started, so late responses cannot overwrite newer state.

mod accounts;
mod auth;
mod balance;
mod profile;
mod statement;
mod summary;
mod transfer;
mod transfers;

pub use accounts::AccountsController;
pub use auth::{LoginController, REGISTERED, RegisterController};
pub use balance::BalanceController;
pub use profile::{ProfileController, ProfileEditController};
pub use statement::StatementController;
pub use summary::SummaryController;
pub use transfer::TransferController;
pub use transfers::{TransferDetailController, TransfersController};

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use rust_decimal::Decimal;
use tracing::debug;

use super::dto::LoginResponse;
use super::feed::PaginatedFeed;
use super::fetch::FetchRunner;
use super::navigation::Route;
use super::notice::Notice;
use super::request_slot::{RequestSlot, Ticket};
use super::use_cases::ProfileSave;
use crate::domain::entities::{Account, AuthToken, FinancialSummary, Profile, Transaction};
use crate::domain::errors::ApiError;
use crate::domain::ports::BankApiPort;

/// Fallback shown when the balance cannot be fetched.
pub const BALANCE_ERROR: &str = "Erro ao buscar saldo";

/// A request ready to be spawned.
pub type PendingFetch = BoxFuture<'static, FetchOutcome>;

/// Completed request addressed to a controller.
#[derive(Debug)]
pub enum FetchOutcome {
    Balance {
        ticket: Ticket,
        result: Result<Decimal, ApiError>,
    },
    Statement {
        ticket: Ticket,
        result: Result<Vec<Transaction>, ApiError>,
    },
    Transfers {
        ticket: Ticket,
        result: Result<Vec<Transaction>, ApiError>,
    },
    Accounts {
        ticket: Ticket,
        result: Result<Vec<Account>, ApiError>,
    },
    Summary {
        ticket: Ticket,
        result: Result<FinancialSummary, ApiError>,
    },
    Profile {
        ticket: Ticket,
        result: Result<Profile, ApiError>,
    },
    LoggedIn(Result<LoginResponse, ApiError>),
    Registered(Result<(), ApiError>),
    TransferSent(Result<(), ApiError>),
    ProfileSaved(Result<ProfileSave, ApiError>),
}

/// What the caller must do after a controller handled an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Notify(Notice),
    Navigate {
        route: Route,
        notice: Option<Notice>,
    },
    /// The session is missing or was rejected; the login screen must be shown.
    RequireLogin,
}

impl Effect {
    #[must_use]
    pub const fn navigate(route: Route) -> Self {
        Self::Navigate {
            route,
            notice: None,
        }
    }
}

/// Common surface of every screen controller.
pub trait Controller: Send {
    /// Requests to issue when the screen appears.
    fn mount(&mut self, _runner: &FetchRunner) -> Vec<PendingFetch> {
        Vec::new()
    }

    /// Applies a completed request.
    fn apply(&mut self, outcome: FetchOutcome) -> Effect;
}

fn authorized_fetch<T, F, Fut, W>(runner: &FetchRunner, call: F, wrap: W) -> PendingFetch
where
    T: Send + 'static,
    F: FnOnce(Arc<dyn BankApiPort>, AuthToken) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    W: FnOnce(Result<T, ApiError>) -> FetchOutcome + Send + 'static,
{
    let request = runner.authorized(call);
    Box::pin(async move { wrap(request.await) })
}

pub(crate) fn fetch_balance(runner: &FetchRunner, ticket: Ticket) -> PendingFetch {
    authorized_fetch(
        runner,
        |api, token| async move { api.fetch_balance(&token).await },
        move |result| FetchOutcome::Balance { ticket, result },
    )
}

pub(crate) fn fetch_statement(runner: &FetchRunner, ticket: Ticket) -> PendingFetch {
    authorized_fetch(
        runner,
        |api, token| async move { api.fetch_statement(&token).await },
        move |result| FetchOutcome::Statement { ticket, result },
    )
}

pub(crate) fn fetch_transfers(runner: &FetchRunner, ticket: Ticket) -> PendingFetch {
    authorized_fetch(
        runner,
        |api, token| async move { api.fetch_transfers(&token).await },
        move |result| FetchOutcome::Transfers { ticket, result },
    )
}

pub(crate) fn fetch_accounts(runner: &FetchRunner, ticket: Ticket) -> PendingFetch {
    authorized_fetch(
        runner,
        |api, token| async move { api.fetch_accounts(&token).await },
        move |result| FetchOutcome::Accounts { ticket, result },
    )
}

pub(crate) fn fetch_summary(runner: &FetchRunner, ticket: Ticket) -> PendingFetch {
    authorized_fetch(
        runner,
        |api, token| async move { api.fetch_summary(&token).await },
        move |result| FetchOutcome::Summary { ticket, result },
    )
}

pub(crate) fn fetch_profile(runner: &FetchRunner, ticket: Ticket) -> PendingFetch {
    authorized_fetch(
        runner,
        |api, token| async move { api.fetch_profile(&token).await },
        move |result| FetchOutcome::Profile { ticket, result },
    )
}

/// Applies a fetch result to a slot, converting errors to display messages.
pub(crate) fn settle<T>(
    slot: &mut RequestSlot<T>,
    ticket: Ticket,
    result: Result<T, ApiError>,
    fallback: &str,
) -> Effect {
    let requires_login = matches!(&result, Err(e) if e.requires_login());
    let applied = slot.resolve(ticket, result.map_err(|e| e.user_message(fallback)));

    if applied && requires_login {
        Effect::RequireLogin
    } else {
        Effect::None
    }
}

/// Feed counterpart of [`settle`].
pub(crate) fn settle_feed<T: Clone>(
    feed: &mut PaginatedFeed<T>,
    ticket: Ticket,
    result: Result<Vec<T>, ApiError>,
    fallback: &str,
) -> Effect {
    let requires_login = matches!(&result, Err(e) if e.requires_login());
    let applied = feed.resolve(ticket, result.map_err(|e| e.user_message(fallback)));

    if applied && requires_login {
        Effect::RequireLogin
    } else {
        Effect::None
    }
}

/// Logs an outcome that does not belong to the receiving controller.
pub(crate) fn unexpected(controller: &str, outcome: &FetchOutcome) -> Effect {
    debug!(controller, ?outcome, "Ignoring outcome for another screen");
    Effect::None
}

/// Test harness helpers.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::application::session_context::SessionContext;
    use crate::domain::ports::mocks::{MockBankApiPort, MockSessionStorage};

    /// Runner over `api` with a restored session holding token `abc`.
    pub async fn signed_in_runner(api: MockBankApiPort) -> FetchRunner {
        let session = SessionContext::new(Arc::new(MockSessionStorage::with_session("abc", "ana")));
        session.restore().await;
        FetchRunner::new(Arc::new(api), session)
    }

    /// Runner over `api` without any session.
    pub fn anonymous_runner(api: MockBankApiPort) -> FetchRunner {
        let session = SessionContext::new(Arc::new(MockSessionStorage::new()));
        FetchRunner::new(Arc::new(api), session)
    }

    /// Awaits every pending fetch in order and applies the outcomes.
    pub async fn drive<C: Controller>(controller: &mut C, pending: Vec<PendingFetch>) -> Vec<Effect> {
        let mut effects = Vec::new();
        for fetch in pending {
            let outcome = fetch.await;
            effects.push(controller.apply(outcome));
        }
        effects
    }
}
