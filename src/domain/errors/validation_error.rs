//! Client-side validation failures.

use thiserror::Error;

/// Rule violated before a request could be sent.
///
/// `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingFields { message: &'static str },

    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,

    #[error("Digite um valor numérico válido.")]
    InvalidAmount,

    #[error("Carregando saldo...")]
    BalanceUnavailable,

    #[error("Seu saldo atual é {balance}.")]
    InsufficientBalance { balance: String },

    #[error("As senhas não coincidem.")]
    PasswordMismatch,
}

impl ValidationError {
    /// Generic required-field message.
    pub const REQUIRED_FIELDS: &'static str = "Preencha todos os campos obrigatórios.";

    /// Creates a missing-fields error with the given message.
    #[must_use]
    pub const fn missing(message: &'static str) -> Self {
        Self::MissingFields { message }
    }

    /// Returns the alert title for this failure.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::MissingFields { .. } => "Campos obrigatórios",
            Self::InvalidEmail => "Email inválido",
            Self::InvalidAmount => "Valor inválido",
            Self::BalanceUnavailable => "Aguarde",
            Self::InsufficientBalance { .. } => "Saldo insuficiente",
            Self::PasswordMismatch => "Senhas diferentes",
        }
    }
}
