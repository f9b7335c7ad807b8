//! Regular-spacing (arithmetic progression) detection.
//!
//! Answers: "do at least `min_count` of these coordinates form a run
//! `x, x + d, x + 2d, ...` with each step matched within `eps`?" Typical use
//! is recognizing evenly spaced structure (fence posts, beacon intervals,
//! sampling grids) in noisy 1D measurements.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{dedup_close, exists_near, PointSet};

/// Configuration for [`has_regular_spacing`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpacingConfig {
    /// Minimum progression length for a positive result.
    /// Values below 3 make every query answer `false`.
    /// Default: 3
    pub min_count: usize,

    /// Tolerance for matching each progression step, and for collapsing
    /// near-duplicate coordinates beforehand.
    /// Default: 1e-6
    pub eps: f64,
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self {
            min_count: 3,
            eps: 1e-6,
        }
    }
}

impl SpacingConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the minimum progression length.
    pub fn with_min_count(mut self, value: usize) -> Self {
        self.min_count = value;
        self
    }

    /// Builder-style setter for the matching tolerance.
    pub fn with_eps(mut self, value: f64) -> Self {
        self.eps = value;
        self
    }
}

/// Test whether the point set contains an arithmetic progression of step
/// `spacing` and length at least `config.min_count`, matched within
/// `config.eps`.
///
/// Degenerate parameters are not errors; they simply yield `false`:
/// non-positive `spacing`, `min_count < 3`, or fewer input points than
/// `min_count`. A degenerate query is indistinguishable from a genuine
/// absence of progressions.
///
/// Coordinates are deduplicated within `eps` first, so a pile of
/// near-identical points counts once. Every deduplicated coordinate is tried
/// as a progression start; the first start reaching `min_count` terms
/// short-circuits the whole search.
///
/// # Example
/// ```
/// use bindu::{has_regular_spacing, PointSet, SpacingConfig};
///
/// let ps = PointSet::from_coordinates(&[0.05, 1.0, 2.01, 3.0, 5.0, 7.0, 9.0]);
/// let config = SpacingConfig::default().with_eps(1e-3);
/// assert!(has_regular_spacing(&ps, 2.0, &config));
/// assert!(!has_regular_spacing(&ps, 6.0, &config));
/// ```
pub fn has_regular_spacing(input: &PointSet, spacing: f64, config: &SpacingConfig) -> bool {
    if spacing <= 0.0 || config.min_count < 3 || input.len() < config.min_count {
        return false;
    }

    let xs = dedup_close(&input.coordinates(), config.eps);
    if xs.len() < config.min_count {
        return false;
    }

    for i in 0..xs.len() {
        let mut count = 1usize;
        let mut next = xs[i] + spacing;
        // Later terms must come from strictly after the start index.
        let search_from = i + 1;

        while exists_near(&xs, search_from, next, config.eps) {
            count += 1;
            next += spacing;
        }

        if count >= config.min_count {
            debug!(
                "has_regular_spacing: found run of {} from x={} (spacing={})",
                count, xs[i], spacing
            );
            return true;
        }
        trace!(
            "has_regular_spacing: start x={} reached {} < {}",
            xs[i],
            count,
            config.min_count
        );
    }
    false
}

/// [`has_regular_spacing`] with the default configuration
/// (`min_count = 3`, `eps = 1e-6`).
#[inline]
pub fn has_regular_spacing_default(input: &PointSet, spacing: f64) -> bool {
    has_regular_spacing(input, spacing, &SpacingConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered_scenario_set() -> PointSet {
        PointSet::from_coordinates(&[0.05, 1.0, 2.01, 3.0, 5.0, 7.0, 9.0])
    }

    #[test]
    fn test_spacing_two_found() {
        let config = SpacingConfig::default().with_eps(1e-3);
        // 1.0, 3.0, 5.0, 7.0, 9.0 is a step-2 run of length 5.
        assert!(has_regular_spacing(&filtered_scenario_set(), 2.0, &config));
    }

    #[test]
    fn test_spacing_four_found_via_skips() {
        // Progression members need not be adjacent in the deduplicated
        // array: 1.0, 5.0, 9.0 is a valid step-4 run even though 2.01 and
        // 3.0 sit in between.
        let config = SpacingConfig::default().with_eps(1e-3);
        assert!(has_regular_spacing(&filtered_scenario_set(), 4.0, &config));
    }

    #[test]
    fn test_spacing_six_not_found() {
        // No coordinate has both x + 6 and x + 12 present.
        let config = SpacingConfig::default().with_eps(1e-3);
        assert!(!has_regular_spacing(&filtered_scenario_set(), 6.0, &config));
    }

    #[test]
    fn test_guard_clauses_yield_false() {
        let ps = filtered_scenario_set();
        let config = SpacingConfig::default();
        assert!(!has_regular_spacing(&ps, 0.0, &config));
        assert!(!has_regular_spacing(&ps, -2.0, &config));
        assert!(!has_regular_spacing(
            &ps,
            2.0,
            &SpacingConfig::default().with_min_count(2)
        ));
        let tiny = PointSet::from_coordinates(&[1.0, 3.0]);
        assert!(!has_regular_spacing(&tiny, 2.0, &config));
    }

    #[test]
    fn test_dedup_shrinks_below_min_count() {
        // Three points, but two collapse under eps: fewer than min_count
        // unique coordinates -> false even though a step exists.
        let ps = PointSet::from_coordinates(&[1.0, 1.0000001, 3.0]);
        let config = SpacingConfig::default().with_eps(1e-3);
        assert!(!has_regular_spacing(&ps, 2.0, &config));
    }

    #[test]
    fn test_later_start_found() {
        // No run from the earliest coordinates; the run starts mid-array.
        let ps = PointSet::from_coordinates(&[0.3, 10.0, 12.0, 14.0, 99.0]);
        assert!(has_regular_spacing_default(&ps, 2.0));
    }

    #[test]
    fn test_tolerance_absorbs_jitter() {
        let ps = PointSet::from_coordinates(&[1.0, 2.0004, 2.9996, 4.0001]);
        let config = SpacingConfig::default().with_eps(1e-3);
        assert!(has_regular_spacing(&ps, 1.0, &config));
        assert!(!has_regular_spacing(&ps, 1.0, &SpacingConfig::default()));
    }
}
