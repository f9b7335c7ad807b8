//! Tolerance-aware coordinate utilities.
//!
//! Floating-point coordinates measured from real sensors rarely repeat
//! exactly, so equality is always "within `eps`". Two boundary conventions
//! are used here and must not be unified:
//!
//! - [`dedup_close`] keeps a value only when its gap to the last kept value
//!   is strictly greater than `eps` (a gap of exactly `eps` collapses).
//! - [`exists_near`] accepts a candidate at a distance of exactly `eps`.

/// Deduplicate near-equal coordinates, keeping the first in ascending order.
///
/// Sorts the input ascending and keeps a value only if it is strictly more
/// than `eps` away from the most recently kept value. The smallest member of
/// each cluster survives. The output is strictly increasing with adjacent
/// gaps `> eps`, and every input value is within `eps` of some survivor.
///
/// # Example
/// ```
/// use bindu::dedup_close;
///
/// let xs = dedup_close(&[1.0, 3.02, 1.0005, 3.0], 1e-2);
/// assert_eq!(xs, vec![1.0, 3.0, 3.02]);
/// ```
pub fn dedup_close(xs: &[f64], eps: f64) -> Vec<f64> {
    if xs.is_empty() {
        return Vec::new();
    }
    let mut sorted = xs.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut out = Vec::with_capacity(sorted.len());
    out.push(sorted[0]);
    for &x in &sorted[1..] {
        // Strict ">": a gap of exactly eps still collapses into the cluster.
        if (x - *out.last().unwrap()).abs() > eps {
            out.push(x);
        }
    }
    out
}

/// Test whether a value within `eps` of `target` exists in `xs[start..]`.
///
/// `xs` must already be sorted ascending; this is a precondition, not a
/// runtime check. Binary-searches for the first element `>= target - eps`
/// and accepts it iff its absolute distance to `target` is `<= eps`
/// (inclusive boundary).
///
/// # Example
/// ```
/// use bindu::exists_near;
///
/// let xs = [1.0, 3.0, 5.0, 7.0];
/// assert!(exists_near(&xs, 1, 5.0005, 1e-3));
/// assert!(!exists_near(&xs, 3, 5.0, 1e-3)); // suffix starts past 5.0
/// ```
#[inline]
pub fn exists_near(xs: &[f64], start: usize, target: f64, eps: f64) -> bool {
    let suffix = match xs.get(start..) {
        Some(s) => s,
        None => return false,
    };
    let idx = suffix.partition_point(|&x| x < target - eps);
    match suffix.get(idx) {
        Some(&x) => (x - target).abs() <= eps,
        None => false,
    }
}
