//! UI screens.

mod accounts_screen;
mod app;
mod balance_screen;
mod home_screen;
mod login_screen;
mod profile_screen;
mod register_screen;
mod screen;
mod statement_screen;
mod summary_screen;
mod transfer_screen;
mod transfers_screen;
mod utils;
mod welcome_screen;

pub use accounts_screen::AccountsScreen;
pub use app::App;
pub use balance_screen::{BalanceScreen, TOGGLE_KEY};
pub use home_screen::HomeScreen;
pub use login_screen::LoginScreen;
pub use profile_screen::{ProfileEditScreen, ProfileScreen};
pub use register_screen::RegisterScreen;
pub use screen::{Screen, ScreenAction};
pub use statement_screen::StatementScreen;
pub use summary_screen::SummaryScreen;
pub use transfer_screen::TransferScreen;
pub use transfers_screen::{TransferDetailScreen, TransfersScreen};
pub use welcome_screen::WelcomeScreen;
