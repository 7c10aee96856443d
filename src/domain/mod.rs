//! Domain layer with core banking entities, rules and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// View lifecycle state.
pub mod load_state;
/// Input masks and date conversions.
pub mod masks;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Client-side validation rules.
pub mod validation;

pub use entities::{AuthToken, Session};
pub use errors::{ApiError, StorageError, ValidationError};
pub use load_state::LoadState;
pub use ports::{BankApiPort, SessionStoragePort};
