//! Data transfer objects for the application layer.

mod auth_dto;
mod forms;

pub use auth_dto::{LoginRequest, LoginResponse, ResolvedSession, SessionSource};
pub use forms::{
    DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, ProfileForm, RegisterForm, TRANSFER_CATEGORIES,
    TransferForm,
};
