//! Minimum-distance filtering of point sets.
//!
//! Collapses clusters of nearby points down to a single representative:
//! after sorting by coordinate, a point survives only if it is at least
//! `min_dist` away from the previously kept point. The smallest coordinate
//! in each cluster is always kept, and attributes ride along with their
//! point.

use log::debug;

use crate::core::PointSet;
use crate::error::{Error, Result};

/// Produce a new point set in which consecutive points are at least
/// `min_dist` apart.
///
/// The input is sorted ascending by coordinate (a copy; the input set is
/// untouched), the first point is always kept, and each following point is
/// kept iff its distance to the last *kept* point is `>= min_dist`
/// (inclusive: a gap of exactly `min_dist` survives). For the output sorted
/// by coordinate, every adjacent pair therefore satisfies
/// `|x[i+1] - x[i]| >= min_dist`.
///
/// Exact coordinate ties sort stably (input order), so which of two points
/// at the same coordinate survives follows insertion order.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `min_dist` is negative.
///
/// # Example
/// ```
/// use bindu::{filter_by_min_distance, PointSet};
///
/// let ps = PointSet::from_coordinates(&[3.0, 3.02, 1.0]);
/// let filtered = filter_by_min_distance(&ps, 0.05).unwrap();
/// assert_eq!(filtered.coordinates(), vec![1.0, 3.0]);
/// ```
pub fn filter_by_min_distance(input: &PointSet, min_dist: f64) -> Result<PointSet> {
    if min_dist < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "min_dist must be non-negative, got {}",
            min_dist
        )));
    }

    if input.is_empty() {
        return Ok(PointSet::new());
    }

    let sorted = input.sorted_by_x();
    let mut out = PointSet::new();
    out.points.reserve(sorted.len());

    // The first (smallest-coordinate) point is always kept.
    let mut last_kept = sorted.points[0].x;
    out.push(sorted.points[0].clone());

    for p in &sorted.points[1..] {
        if (p.x - last_kept).abs() >= min_dist {
            last_kept = p.x;
            out.push(p.clone());
        }
    }

    debug!(
        "filter_by_min_distance: kept {}/{} points (min_dist={})",
        out.len(),
        input.len(),
        min_dist
    );
    Ok(out)
}
