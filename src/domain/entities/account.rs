//! Bank account entity.

use std::fmt;

use rust_decimal::Decimal;

/// Kind of bank account as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountType {
    /// Conta corrente.
    Checking,
    /// Poupança.
    Savings,
    /// Conta salário.
    Salary,
    /// Conta investimento.
    Investment,
    /// Any label the client does not know about.
    Other(String),
}

impl AccountType {
    /// Account types offered in the profile editor.
    pub const SELECTABLE: [Self; 4] = [Self::Checking, Self::Savings, Self::Salary, Self::Investment];

    /// Returns the backend label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Checking => "Corrente",
            Self::Savings => "Poupança",
            Self::Salary => "Salário",
            Self::Investment => "Investimento",
            Self::Other(label) => label,
        }
    }

    /// Parses a backend label, keeping unknown labels verbatim.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "corrente" => Self::Checking,
            "poupança" | "poupanca" => Self::Savings,
            "salário" | "salario" => Self::Salary,
            "investimento" => Self::Investment,
            _ => Self::Other(label.trim().to_string()),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only account record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: u64,
    name: String,
    number: String,
    balance: Decimal,
    kind: AccountType,
}

impl Account {
    /// Creates new account.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        number: impl Into<String>,
        balance: Decimal,
        kind: AccountType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
            balance,
            kind,
        }
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    #[must_use]
    pub const fn kind(&self) -> &AccountType {
        &self.kind
    }
}
