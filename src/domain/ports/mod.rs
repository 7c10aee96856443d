mod bank_api_port;
mod session_storage_port;

pub use bank_api_port::{BankApiPort, Credentials, NewTransfer, Registration};
pub use session_storage_port::SessionStoragePort;
