//! Domain error types.

mod api_error;
mod storage_error;
mod validation_error;

pub use api_error::{ApiError, CONNECTION_MESSAGE, SESSION_EXPIRED_MESSAGE};
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
