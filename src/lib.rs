//! MockBank - A terminal client for the MockBank banking API.
//!
//! This crate provides a terminal-based mobile-banking client with clean
//! architecture: session management, an HTTP gateway to the bank backend,
//! UI-agnostic screen controllers and a TUI built on top of them.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing controllers, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "mockbank";
