//! Statement entries and transfers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Direction of money movement relative to the signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Money left the account.
    Sent,
    /// Money entered the account.
    Received,
}

impl TransferKind {
    /// Parses the backend `tipo` label. Anything other than `recebida` is a debit.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("recebida") {
            Self::Received
        } else {
            Self::Sent
        }
    }

    /// Returns the backend label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sent => "enviada",
            Self::Received => "recebida",
        }
    }

    /// Returns the human label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sent => "Enviada",
            Self::Received => "Recebida",
        }
    }

    /// Whether the movement credits the account.
    #[must_use]
    pub const fn is_credit(self) -> bool {
        matches!(self, Self::Received)
    }

    /// Display sign prefix.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Sent => '-',
            Self::Received => '+',
        }
    }
}

/// A single statement line or transfer.
///
/// `amount` is always a non-negative magnitude; the sign is derived from
/// [`TransferKind`] when displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: Option<u64>,
    kind: TransferKind,
    description: String,
    category: Option<String>,
    amount: Decimal,
    timestamp: DateTime<Utc>,
    counterparty: Option<String>,
}

impl Transaction {
    /// Creates new transaction, normalizing amount to its magnitude.
    #[must_use]
    pub fn new(
        kind: TransferKind,
        description: impl Into<String>,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            kind,
            description: description.into(),
            category: None,
            amount: amount.abs(),
            timestamp,
            counterparty: None,
        }
    }

    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets category, ignoring blank labels.
    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.trim().is_empty());
        self
    }

    /// Sets the other party's account, ignoring blank labels.
    #[must_use]
    pub fn with_counterparty(mut self, counterparty: Option<String>) -> Self {
        self.counterparty = counterparty.filter(|c| !c.trim().is_empty());
        self
    }

    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> TransferKind {
        self.kind
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }
}
