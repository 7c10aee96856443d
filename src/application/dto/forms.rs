//! Form submissions for screens that write to the backend.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::entities::AccountType;

/// Category list offered by the transfer form.
pub const TRANSFER_CATEGORIES: [&str; 9] = [
    "Moradia",
    "Transporte",
    "Alimentação",
    "Educação",
    "Lazer",
    "Saúde",
    "Investimento",
    "Presentes",
    "Outros",
];

/// Category used when none is chosen.
pub const DEFAULT_CATEGORY: &str = "Outros";

/// Description used when the field is left blank.
pub const DEFAULT_DESCRIPTION: &str = "Transferência";

/// Registration form as typed.
#[derive(Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    /// Masked as `000.000.000-00`.
    pub cpf: String,
    pub nickname: String,
    pub password: Zeroizing<String>,
    /// Present only when the confirm-password field is enabled.
    pub confirmation: Option<Zeroizing<String>>,
}

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("name", &self.name)
            .field("cpf", &self.cpf)
            .field("nickname", &self.nickname)
            .finish_non_exhaustive()
    }
}

/// Transfer form as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferForm {
    /// Destination nickname.
    pub destination: String,
    /// Raw amount text, `,` or `.` as decimal separator.
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self {
            destination: String::new(),
            amount: String::new(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

/// Profile edit form as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub email: String,
    /// Masked as `(00) 00000-0000`.
    pub phone: String,
    /// Masked as `DD/MM/YYYY`.
    pub birth_date: String,
    pub address: String,
    pub account_type: Option<AccountType>,
}
