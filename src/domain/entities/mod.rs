//! Domain entity definitions.

mod account;
mod profile;
mod session;
mod summary;
mod token;
mod transaction;

pub use account::{Account, AccountType};
pub use profile::{Profile, ProfileUpdate};
pub use session::{GUEST_NICKNAME, Session};
pub use summary::{CategorySummary, FinancialSummary};
pub use token::AuthToken;
pub use transaction::{Transaction, TransferKind};
