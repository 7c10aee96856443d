//! Display formatting for money, dates and feed items.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::entities::{Transaction, TransferKind};

/// Placeholder shown while the balance is hidden.
pub const HIDDEN_BALANCE: &str = "•••••••";

/// Label used when a transaction carries no category.
pub const NO_CATEGORY: &str = "Sem categoria";

const MISSING_ORIGIN: &str = "Conta de origem não encontrada";
const MISSING_DESTINATION: &str = "Conta de destino não encontrada";

/// Formats an amount as Brazilian currency, e.g. `R$ 1.234,56`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format!("{:.2}", rounded.abs());
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}R$ {},{fraction}", group_thousands(integer))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a magnitude with the sign derived from `kind`, e.g. `+ R$ 10,00`.
#[must_use]
pub fn format_signed(amount: Decimal, kind: TransferKind) -> String {
    format!("{} {}", kind.sign(), format_brl(amount.abs()))
}

/// Balance text honoring the visibility toggle.
#[must_use]
pub fn balance_text(balance: Decimal, visible: bool) -> String {
    if visible {
        format_brl(balance)
    } else {
        HIDDEN_BALANCE.to_string()
    }
}

/// Formats a timestamp as `DD/MM/YYYY` in `tz`.
#[must_use]
pub fn format_date<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%d/%m/%Y").to_string()
}

/// Formats a timestamp as `HH:MM` in `tz`.
#[must_use]
pub fn format_time<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

/// Display-ready projection of a [`Transaction`]. Computed per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionView {
    pub is_credit: bool,
    pub amount: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub time: String,
    /// `De: ...` for credits, `Para: ...` for debits.
    pub counterparty: String,
    pub kind_label: &'static str,
}

impl TransactionView {
    #[must_use]
    pub fn new<Tz>(transaction: &Transaction, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let kind = transaction.kind();
        let counterparty = match kind {
            TransferKind::Received => format!(
                "De: {}",
                transaction.counterparty().unwrap_or(MISSING_ORIGIN)
            ),
            TransferKind::Sent => format!(
                "Para: {}",
                transaction.counterparty().unwrap_or(MISSING_DESTINATION)
            ),
        };

        Self {
            is_credit: kind.is_credit(),
            amount: format_signed(transaction.amount(), kind),
            description: transaction.description().to_string(),
            category: transaction.category().unwrap_or(NO_CATEGORY).to_string(),
            date: format_date(transaction.timestamp(), tz),
            time: format_time(transaction.timestamp(), tz),
            counterparty,
            kind_label: kind.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use test_case::test_case;

    #[test_case(Decimal::new(0, 0), "R$ 0,00" ; "zero")]
    #[test_case(Decimal::new(5, 1), "R$ 0,50" ; "fraction")]
    #[test_case(Decimal::new(123_456, 2), "R$ 1.234,56" ; "thousands")]
    #[test_case(Decimal::new(100_000_000, 2), "R$ 1.000.000,00" ; "millions")]
    #[test_case(Decimal::new(-2_550, 2), "-R$ 25,50" ; "negative")]
    #[test_case(Decimal::new(19_999, 3), "R$ 20,00" ; "rounding")]
    fn test_format_brl(amount: Decimal, expected: &str) {
        assert_eq!(format_brl(amount), expected);
    }

    #[test]
    fn test_signed_amount_uses_kind() {
        assert_eq!(
            format_signed(Decimal::new(1_000, 2), TransferKind::Received),
            "+ R$ 10,00"
        );
        assert_eq!(
            format_signed(Decimal::new(1_000, 2), TransferKind::Sent),
            "- R$ 10,00"
        );
    }

    #[test]
    fn test_hidden_balance() {
        assert_eq!(balance_text(Decimal::from(10), false), HIDDEN_BALANCE);
        assert_eq!(balance_text(Decimal::from(10), true), "R$ 10,00");
    }

    fn sample(kind: TransferKind) -> Transaction {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        Transaction::new(kind, "Pix", Decimal::new(4_250, 2), timestamp)
    }

    #[test]
    fn test_view_fallbacks() {
        let view = TransactionView::new(&sample(TransferKind::Received), &Utc);

        assert!(view.is_credit);
        assert_eq!(view.amount, "+ R$ 42,50");
        assert_eq!(view.category, NO_CATEGORY);
        assert_eq!(view.counterparty, "De: Conta de origem não encontrada");
        assert_eq!(view.date, "05/03/2024");
        assert_eq!(view.time, "14:07");
        assert_eq!(view.kind_label, "Recebida");
    }

    #[test]
    fn test_view_with_counterparty_and_offset() {
        let tx = sample(TransferKind::Sent)
            .with_category(Some("Lazer".to_string()))
            .with_counterparty(Some("bia".to_string()));
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();

        let view = TransactionView::new(&tx, &brt);

        assert!(!view.is_credit);
        assert_eq!(view.amount, "- R$ 42,50");
        assert_eq!(view.category, "Lazer");
        assert_eq!(view.counterparty, "Para: bia");
        assert_eq!(view.time, "11:07");
    }
}
