//! Error handling for the Truco bot.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
