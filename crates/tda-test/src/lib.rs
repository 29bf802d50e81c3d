//! tda-test - Shared assertion helpers used by the tda workspace's
//! unit and integration tests.
//!
//! Every geometric statistic in this workspace (landscape area,
//! perimeter, centroid; convex-peel area, perimeter, centroid) is
//! compared against worked examples to a fixed absolute tolerance
//! rather than exact equality, since they are accumulated from
//! floating-point sums.

/// Assert that `actual` is within `tol` of `expected`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "expected {expected} within {tol}, got {actual} (diff {diff})"
    );
}

/// Assert that a 2-D point is within `tol` of `expected` in each
/// coordinate.
pub fn assert_close_point(actual: (f64, f64), expected: (f64, f64), tol: f64) {
    assert_close(actual.0, expected.0, tol);
    assert_close(actual.1, expected.1, tol);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assert_close_accepts_within_tolerance() {
        assert_close(1.0000001, 1.0, 1e-5);
    }

    #[test]
    #[should_panic]
    fn assert_close_rejects_outside_tolerance() {
        assert_close(1.1, 1.0, 1e-5);
    }
}
