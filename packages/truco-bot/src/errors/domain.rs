//! Domain-level error type.
//!
//! Raised while parsing cards or assembling a [`crate::domain::GameSnapshot`].
//! Once a snapshot exists the decision engine itself has nothing fallible
//! left to report, except the empty-hand case of card selection
//! (see [`crate::ai::BotError`]).

use thiserror::Error;

/// What kind of validation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    ParseCard,
    ParseRank,
    ParseSuit,
    ScoreOutOfRange,
    TooManyRoundResults,
    HandTooLarge,
    DuplicateCard,
    ViraInHand,
    OpponentCardInHand,
    InvalidHandPoints,
    MalformedSnapshot,
    Other(String),
}

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game invariant violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn kind(&self) -> &ValidationKind {
        match self {
            DomainError::Validation(kind, _) => kind,
        }
    }
}
