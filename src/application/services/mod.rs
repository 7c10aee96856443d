//! Presentation-independent application services.

pub mod display;

pub use display::{
    HIDDEN_BALANCE, NO_CATEGORY, TransactionView, balance_text, format_brl, format_signed,
};
