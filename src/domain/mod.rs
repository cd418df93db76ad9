//! Core domain types and logic.

pub mod quote;
pub mod normalize;
pub mod filter;
pub mod score;
pub mod rank;
pub mod settings;
pub mod error;
