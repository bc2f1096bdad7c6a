//! Utilities for generating examples, benchmarks, and test cases.

use crate::Point;

/// A regular `n`-gon inscribed in the unit circle, counter-clockwise.
///
/// Every vertex is on both the convex hull and the reduced polygon, so
/// this is the "nothing to remove" case.
///
/// # Panics
///
/// Panics if `n < 3`.
pub fn circle(n: usize) -> Vec<Point> {
    assert!(n >= 3);
    (0..n)
        .map(|i| {
            let theta = i as f64 / n as f64 * std::f64::consts::TAU;
            Point::new(theta.cos(), theta.sin())
        })
        .collect()
}

/// A box whose bottom edge zigzags `n` times, counter-clockwise.
///
/// Every raised bottom vertex is reflex, which makes the lower chain's
/// forward-neighbor decisions churn.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn sawtooth(n: usize) -> Vec<Point> {
    assert!(n >= 2);
    let mut ret: Vec<Point> = (0..n)
        .map(|i| Point::new(i as f64, if i % 2 == 0 { 0.0 } else { 0.5 }))
        .collect();
    ret.push(Point::new((n - 1) as f64, 2.0));
    ret.push(Point::new(0.0, 2.0));
    ret
}
