//! Request sequencing for view state slots.

use tracing::debug;

use crate::domain::LoadState;

/// Identifies one issued request for a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket issuer.
///
/// A resolution is only applied if its ticket is the latest one issued, so a
/// slow response can never overwrite a newer one.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { issued: 0 }
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Whether `ticket` is still the most recent.
    #[must_use]
    pub const fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued && self.issued != 0
    }

    /// Supersedes all outstanding tickets without issuing a new one.
    pub fn invalidate(&mut self) {
        self.issued += 1;
    }
}

/// A single piece of fetched view state with its request sequence.
#[derive(Debug, Clone)]
pub struct RequestSlot<T> {
    state: LoadState<T>,
    sequence: RequestSequence,
}

impl<T> RequestSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            sequence: RequestSequence::new(),
        }
    }

    /// Moves to `Loading` and issues a ticket for the request.
    pub fn begin(&mut self) -> Ticket {
        self.state = LoadState::Loading;
        self.sequence.issue()
    }

    /// Applies a response if `ticket` is the latest. Returns whether it was applied.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if !self.sequence.is_latest(ticket) {
            debug!(ticket = ticket.value(), "Discarding stale response");
            return false;
        }

        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(message) => LoadState::Failed(message),
        };
        true
    }

    /// Records a failure that happened before any request was issued.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.sequence.invalidate();
        self.state = LoadState::Failed(message.into());
    }

    /// Drops outstanding requests and returns to `Idle`.
    pub fn reset(&mut self) {
        self.sequence.invalidate();
        self.state = LoadState::Idle;
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState<T> {
        &self.state
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        self.state.value()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

impl<T> Default for RequestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}
