//! Transfer history and transfer detail controllers.

use std::fmt::Display;

use chrono::TimeZone;

use super::{
    Controller, Effect, FetchOutcome, PendingFetch, fetch_transfers, settle_feed, unexpected,
};
use crate::application::feed::PaginatedFeed;
use crate::application::fetch::FetchRunner;
use crate::application::navigation::Route;
use crate::application::services::TransactionView;
use crate::domain::entities::Transaction;

const TRANSFERS_ERROR: &str = "Erro ao carregar transferências";

/// Transfer history with refresh and item selection.
#[derive(Debug, Default)]
pub struct TransfersController {
    feed: PaginatedFeed<Transaction>,
    selected: usize,
}

impl TransfersController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-fetches the history. Visible items stay until the response arrives.
    pub fn refresh(&mut self, runner: &FetchRunner) -> PendingFetch {
        let ticket = self.feed.begin_refresh();
        fetch_transfers(runner, ticket)
    }

    pub fn load_more(&mut self) -> bool {
        self.feed.load_more()
    }

    #[must_use]
    pub const fn feed(&self) -> &PaginatedFeed<Transaction> {
        &self.feed
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the selection down, revealing the next page at the end.
    pub fn select_next(&mut self) {
        if self.selected + 1 >= self.feed.items().len() {
            self.feed.load_more();
        }
        if self.selected + 1 < self.feed.items().len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Route to the detail screen for the selected transfer.
    #[must_use]
    pub fn open_selected(&self) -> Option<Route> {
        self.feed
            .items()
            .get(self.selected)
            .cloned()
            .map(Route::TransferDetail)
    }
}

impl Controller for TransfersController {
    fn mount(&mut self, runner: &FetchRunner) -> Vec<PendingFetch> {
        self.selected = 0;
        let ticket = self.feed.begin_load();
        vec![fetch_transfers(runner, ticket)]
    }

    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        match outcome {
            FetchOutcome::Transfers { ticket, result } => {
                let effect = settle_feed(&mut self.feed, ticket, result, TRANSFERS_ERROR);
                self.selected = self.selected.min(self.feed.items().len().saturating_sub(1));
                effect
            }
            other => unexpected("transfers", &other),
        }
    }
}

/// Read-only view of a transfer received as a navigation parameter.
#[derive(Debug, Clone)]
pub struct TransferDetailController {
    transfer: Transaction,
}

impl TransferDetailController {
    #[must_use]
    pub const fn new(transfer: Transaction) -> Self {
        Self { transfer }
    }

    #[must_use]
    pub const fn transfer(&self) -> &Transaction {
        &self.transfer
    }

    /// Display fields in `tz`.
    #[must_use]
    pub fn view<Tz>(&self, tz: &Tz) -> TransactionView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        TransactionView::new(&self.transfer, tz)
    }

    /// `DD/MM/YYYY às HH:MM` in `tz`.
    #[must_use]
    pub fn when<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let view = self.view(tz);
        format!("{} às {}", view.date, view.time)
    }
}

impl Controller for TransferDetailController {
    fn apply(&mut self, outcome: FetchOutcome) -> Effect {
        unexpected("transfer detail", &outcome)
    }
}
