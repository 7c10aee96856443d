//! Financial summary returned by `/contas/resumo-transacoes`.

use rust_decimal::Decimal;

/// Totals for a single transfer category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub sent: Decimal,
    pub received: Decimal,
}

/// Aggregated movement totals for the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialSummary {
    pub total_received: Decimal,
    pub total_sent: Decimal,
    pub balance: Decimal,
    /// Empty when the backend omits the breakdown.
    pub categories: Vec<CategorySummary>,
}
