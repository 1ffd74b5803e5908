//! Bot configuration handling.
//!
//! Every threshold the decision rules compare against lives here so a host
//! can tune a bot per profile without touching the rule tables.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::domain::Rank;

/// Tunable thresholds for the rule-based bots.
///
/// All fields are optional in JSON; missing ones take their defaults.
///
/// # Example JSON Config
///
/// ```json
/// {"raise_ceiling": 12, "attack_rank": "THREE", "support_rank": "ACE"}
/// ```
///
/// Partial config, only widening the comfortable lead:
/// ```json
/// {"wide_margin": 8}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Stake at which a raise is always accepted. 12 is the largest stake.
    pub raise_ceiling: u8,

    /// A card whose relative value reaches this rank counts as an attack
    /// card. Every manilha qualifies whatever the rank.
    pub attack_rank: Rank,

    /// Rank a second card must reach to back a manilha in a strong hand,
    /// and the lowest rank that makes a pair a cama de gato.
    pub support_rank: Rank,

    /// Mão de onze lead at which an attack card alone is enough to play.
    pub wide_margin: i16,

    /// Upper bound of the close-game band where a strong hand plays the
    /// mão de onze.
    pub narrow_margin: i16,

    /// Lower bound of that band. The default reaches the lowest possible
    /// margin, so trailing never blocks a strong hand.
    pub narrow_margin_floor: i16,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            raise_ceiling: 12,
            attack_rank: Rank::Three,
            support_rank: Rank::Ace,
            wide_margin: 7,
            narrow_margin: 4,
            narrow_margin_floor: -11,
        }
    }
}

impl BotConfig {
    /// Create a BotConfig from an optional JSON value.
    ///
    /// `None` gives the defaults. A blob that does not decode also gives
    /// the defaults, with a warning.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        let Some(json) = config else {
            return Self::default();
        };
        serde_json::from_value(json.clone()).unwrap_or_else(|err| {
            warn!(error = %err, "invalid bot config, using defaults");
            Self::default()
        })
    }
}
