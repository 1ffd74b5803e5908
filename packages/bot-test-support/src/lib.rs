//! Bot test support utilities
//!
//! Shared by the unit and integration tests of `truco-bot`: a unified logging
//! initializer and the project-wide proptest configuration.

pub mod logging;
pub mod proptest_prelude;
