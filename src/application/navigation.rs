//! Screen routes.

use crate::domain::entities::Transaction;

/// A screen the client can show.
///
/// Navigation parameters travel by value inside the variant and are never
/// mutated after the screen receives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Login,
    Register,
    Home,
    Accounts,
    Balance,
    Statement,
    Summary,
    Transfer,
    Transfers,
    TransferDetail(Transaction),
    Profile,
    ProfileEdit,
}

impl Route {
    /// Entries of the home screen feature list, in display order.
    pub const FEATURES: [(Self, &'static str); 6] = [
        (Self::Accounts, "Listar contas"),
        (Self::Balance, "Consultar Saldo"),
        (Self::Statement, "Ver Extrato"),
        (Self::Summary, "Resumo Financeiro"),
        (Self::Transfer, "Fazer Transferência"),
        (Self::Transfers, "Ver Transferências"),
    ];

    /// Whether the screen needs a signed-in session.
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        !matches!(self, Self::Welcome | Self::Login | Self::Register)
    }

    /// Screen title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Welcome => "Bem-vindo",
            Self::Login => "Login",
            Self::Register => "Criar conta",
            Self::Home => "Início",
            Self::Accounts => "Minhas Contas",
            Self::Balance => "Saldo",
            Self::Statement => "Extrato de Transações",
            Self::Summary => "Resumo Financeiro",
            Self::Transfer => "Fazer Transferência",
            Self::Transfers => "Minhas Transferências",
            Self::TransferDetail(_) => "Detalhes da Transferência",
            Self::Profile => "Meu Perfil",
            Self::ProfileEdit => "Atualizar Perfil",
        }
    }

    /// Where the back affordance leads.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self {
            Self::Welcome | Self::Home => None,
            Self::Login | Self::Register => Some(Self::Welcome),
            Self::TransferDetail(_) => Some(Self::Transfers),
            Self::ProfileEdit => Some(Self::Profile),
            _ => Some(Self::Home),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(!Route::Welcome.requires_session());
        assert!(!Route::Login.requires_session());
        assert!(!Route::Register.requires_session());
        assert!(Route::Balance.requires_session());
        assert!(Route::ProfileEdit.requires_session());
    }

    #[test]
    fn test_feature_routes_lead_home() {
        for (route, _) in &Route::FEATURES {
            assert_eq!(route.parent(), Some(Route::Home));
        }
    }
}
