//! Session storage adapters.

mod file_storage;
#[cfg(feature = "keyring")]
mod keyring_storage;
#[cfg(not(feature = "keyring"))]
mod keyring_storage_stub;

pub use file_storage::FileSessionStorage;
#[cfg(feature = "keyring")]
pub use keyring_storage::KeyringSessionStorage;
#[cfg(not(feature = "keyring"))]
pub use keyring_storage_stub::KeyringSessionStorage;
