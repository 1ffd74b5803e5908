//! Domain layer: card model, vira-relative ranking and the decision snapshot.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod hand_patterns;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
mod tests_props_ranking;

// Re-exports for ergonomics
pub use cards_logic::{CardRanking, TOP_VALUE};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use hand_patterns::{classify_hand, HandStrength};
pub use snapshot::{GameSnapshot, RoundResult, SnapshotBuilder};
