//! Client-side paginated feed over a fully fetched dataset.

use tracing::debug;

use super::request_slot::{RequestSequence, Ticket};
use crate::domain::LoadState;

/// Items revealed per page.
pub const PAGE_SIZE: usize = 10;

/// Feed state for statement-style screens.
///
/// The backend returns the whole history in one response; pages are slices of
/// that materialized dataset. `load_more` never issues a request, `refresh`
/// always does and replaces the visible items with the first page.
#[derive(Debug, Clone)]
pub struct PaginatedFeed<T> {
    dataset: Vec<T>,
    items: Vec<T>,
    page: usize,
    is_loading: bool,
    is_refreshing: bool,
    error: Option<String>,
    loaded: bool,
    sequence: RequestSequence,
}

impl<T: Clone> PaginatedFeed<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dataset: Vec::new(),
            items: Vec::new(),
            page: 1,
            is_loading: false,
            is_refreshing: false,
            error: None,
            loaded: false,
            sequence: RequestSequence::new(),
        }
    }

    /// Starts the initial fetch.
    pub fn begin_load(&mut self) -> Ticket {
        self.is_loading = true;
        self.sequence.issue()
    }

    /// Starts a pull-to-refresh fetch. Visible items stay until it resolves.
    pub fn begin_refresh(&mut self) -> Ticket {
        self.is_refreshing = true;
        self.sequence.issue()
    }

    /// Applies a fetch result. Stale tickets are ignored.
    ///
    /// On success the dataset is replaced and the feed resets to page 1.
    /// On failure the error is recorded and previously shown items remain.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<T>, String>) -> bool {
        if !self.sequence.is_latest(ticket) {
            debug!(ticket = ticket.value(), "Discarding stale feed response");
            return false;
        }

        self.is_loading = false;
        self.is_refreshing = false;

        match result {
            Ok(dataset) => {
                self.dataset = dataset;
                self.page = 1;
                self.items = self.dataset.iter().take(PAGE_SIZE).cloned().collect();
                self.error = None;
                self.loaded = true;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
        true
    }

    /// Records a failure that happened before any request was issued.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.sequence.invalidate();
        self.is_loading = false;
        self.is_refreshing = false;
        self.error = Some(message.into());
    }

    /// Appends the next slice of the dataset. Returns whether anything was added.
    pub fn load_more(&mut self) -> bool {
        if self.is_loading || !self.has_more() {
            return false;
        }

        let start = self.items.len();
        let end = (start + PAGE_SIZE).min(self.dataset.len());
        self.items.extend_from_slice(&self.dataset[start..end]);
        self.page += 1;

        debug!(page = self.page, shown = self.items.len(), "Feed page appended");
        true
    }

    /// Whether the dataset holds items not yet shown.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.items.len() < self.dataset.len()
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Total size of the fetched dataset.
    #[must_use]
    pub fn total(&self) -> usize {
        self.dataset.len()
    }

    /// Summarizes the feed as a [`LoadState`] phase for rendering.
    #[must_use]
    pub fn status(&self) -> LoadState<usize> {
        if self.is_loading {
            LoadState::Loading
        } else if let Some(error) = &self.error {
            LoadState::Failed(error.clone())
        } else if self.loaded {
            LoadState::Loaded(self.items.len())
        } else {
            LoadState::Idle
        }
    }
}

impl<T: Clone> Default for PaginatedFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}
