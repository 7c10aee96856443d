//! Balance screen controller.

use rust_decimal::Decimal;

use super::{
    BALANCE_ERROR, Controller, Effect, FetchOutcome, PendingFetch, fetch_balance, settle,
    unexpected,
};
use crate::application::fetch::FetchRunner;
use crate::application::request_slot::RequestSlot;
use crate::application::services::balance_text;
use crate::domain::LoadState;

/// Balance card with an optional show/hide toggle.
///
/// Visibility is local UI state: it starts hidden on every mount and is never
/// persisted.
#[derive(Debug)]
pub struct BalanceController {
    balance: RequestSlot<Decimal>,
    visible: bool,
    toggle_enabled: bool,
}

impl BalanceController {
    /// Creates controller. Without the toggle the balance is always shown.
    #[must_use]
    pub fn new(toggle_enabled: bool) -> Self {
        Self {
            balance: RequestSlot::new(),
            visible: !toggle_enabled,
            toggle_enabled,
        }
    }

    /// Flips visibility. No-op when the toggle is disabled.
    pub fn toggle_visibility(&mut self) {
        if self.toggle_enabled {
            self.visible = !self.visible;
        }
    }

    /// Re-fetches the balance.
    pub fn refresh(&mut self, runner: &FetchRunner) -> PendingFetch {
        let ticket = self.balance.begin();
        fetch_balance(runner, ticket)
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn toggle_enabled(&self) -> bool {
        self.toggle_enabled
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<Decimal> {
        self.balance.state()
    }

    /// Text for the balance card, `None` until loaded.
    #[must_use]
    pub fn display(&self) -> Option<String> {
        self.balance
            .value()
            .map(|balance| balance_text(*balance, self.visible))
    }
}

impl Controller for BalanceController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.visible = !self.toggle_enabled;
        vec![self.refresh(runner)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Balance { ticket, result } => {
                settle(&mut self.balance, ticket, result, BALANCE_ERROR)
            }
            other => unexpected("balance", &other),
        }
    }
}
