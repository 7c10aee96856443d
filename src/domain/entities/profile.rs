//! Account holder profile.

use super::AccountType;

/// Profile as returned by `GET /contas/perfil`.
///
/// `birth_date` keeps the backend form (`YYYY-MM-DD`, possibly with a time
/// suffix); conversion to the display form happens at the edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub nickname: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub account_type: Option<AccountType>,
}

/// Editable subset of the profile sent with `PUT /contas/perfil`.
///
/// `birth_date` must already be in backend form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub address: String,
    pub account_type: Option<AccountType>,
}
