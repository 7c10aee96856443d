//! Use case implementations.

mod login_use_case;
mod register_use_case;
mod resolve_session_use_case;
mod transfer_use_case;
mod update_profile_use_case;

pub use login_use_case::{INVALID_CREDENTIALS, LoginUseCase};
pub use register_use_case::{DUPLICATE_ACCOUNT, RegisterUseCase};
pub use resolve_session_use_case::ResolveSessionUseCase;
pub use transfer_use_case::{TRANSFER_FAILED, TRANSFER_SUCCESS, TransferUseCase};
pub use update_profile_use_case::{EMAIL_IN_USE, PROFILE_UPDATED, ProfileSave, UpdateProfileUseCase};
