//! Ordered rule tables.
//!
//! A decision is a [`RuleSet`]: named rules tried top to bottom, then a
//! fallback. The first rule whose predicate holds and whose outcome resolves
//! decides. Tables are `static`, so every bot built from the same config
//! walks the same rules.

use std::fmt::Debug;

use tracing::debug;

use super::config::BotConfig;
use crate::domain::{Card, CardRanking, GameSnapshot};

/// Everything a rule may look at: the snapshot, its ranking and the config.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub snapshot: &'a GameSnapshot,
    pub ranking: CardRanking,
    pub config: &'a BotConfig,
}

impl<'a> RuleContext<'a> {
    pub fn new(snapshot: &'a GameSnapshot, config: &'a BotConfig) -> Self {
        Self {
            snapshot,
            ranking: snapshot.ranking(),
            config,
        }
    }

    pub fn hand(&self) -> &'a [Card] {
        &self.snapshot.hand
    }
}

/// What a matching rule produces.
pub enum Outcome<T> {
    /// A fixed value.
    Always(T),
    /// A value computed from the context. `None` passes to the next rule.
    Derive(fn(&RuleContext<'_>) -> Option<T>),
}

impl<T: Copy> Outcome<T> {
    fn resolve(&self, cx: &RuleContext<'_>) -> Option<T> {
        match self {
            Outcome::Always(value) => Some(*value),
            Outcome::Derive(derive) => derive(cx),
        }
    }
}

pub struct Rule<T> {
    pub name: &'static str,
    pub when: fn(&RuleContext<'_>) -> bool,
    pub then: Outcome<T>,
}

pub struct RuleSet<T: 'static> {
    pub decision: &'static str,
    pub rules: &'static [Rule<T>],
    pub fallback: Outcome<T>,
}

/// Name of the pseudo-rule reported when no rule matched.
pub const FALLBACK: &str = "fallback";

impl<T: Copy + Debug + 'static> RuleSet<T> {
    /// Value of the first matching rule, or of the fallback.
    pub fn evaluate(&self, cx: &RuleContext<'_>) -> Option<T> {
        self.explain(cx).1
    }

    /// Like [`evaluate`](Self::evaluate), also naming the rule that decided.
    pub fn explain(&self, cx: &RuleContext<'_>) -> (&'static str, Option<T>) {
        for rule in self.rules {
            if !(rule.when)(cx) {
                continue;
            }
            if let Some(outcome) = rule.then.resolve(cx) {
                debug!(
                    decision = self.decision,
                    rule = rule.name,
                    ?outcome,
                    "rule matched"
                );
                return (rule.name, Some(outcome));
            }
        }

        let outcome = self.fallback.resolve(cx);
        debug!(
            decision = self.decision,
            rule = FALLBACK,
            ?outcome,
            "no rule matched"
        );
        (FALLBACK, outcome)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> {
        self.rules.iter().map(|rule| rule.name)
    }
}
