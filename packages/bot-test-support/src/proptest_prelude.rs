// Proptest prelude: shared configuration for unit and integration tests.
//
// Env knobs:
// - PROPTEST_CASES: number of cases per property (e.g. 32, 800, 5000).
// - PROPTEST_MAX_SHRINK_MS: optional cap for shrinking time in milliseconds.
//
// Generators build valid hands by construction (unique cards drawn from the
// 40-card deck), so no property relies on prop_assume!.

use proptest::prelude::ProptestConfig;

/// Default number of cases when `PROPTEST_CASES` is unset or invalid.
pub const DEFAULT_CASES: u32 = 64;

pub fn config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_CASES)
        .max(1);

    let max_shrink_time = std::env::var("PROPTEST_MAX_SHRINK_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // Disable persistence to silence regression-file warnings
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}
