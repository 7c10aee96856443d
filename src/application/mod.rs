//! Application layer with session handling, use cases and screen controllers.

/// Screen controllers.
pub mod controllers;
/// Data transfer objects and form models.
pub mod dto;
/// Client-side paginated feeds.
pub mod feed;
/// Authenticated request execution.
pub mod fetch;
/// Screen routes.
pub mod navigation;
/// User-facing alerts.
pub mod notice;
/// Stale-response protection for view state.
pub mod request_slot;
/// Display formatting.
pub mod services;
/// Shared session state.
pub mod session_context;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, LoginResponse, ResolvedSession, SessionSource};
pub use fetch::FetchRunner;
pub use navigation::Route;
pub use notice::{Notice, NoticeLevel};
pub use session_context::SessionContext;
pub use use_cases::{LoginUseCase, ResolveSessionUseCase};
