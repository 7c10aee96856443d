//! MockBank backend adapter.

mod client;
mod dto;

pub use client::{BankApiClient, DEFAULT_BASE_URL};
