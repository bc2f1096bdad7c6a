//! Utilities for fuzz and/or property testing using `arbitrary`.

use std::collections::{BTreeMap, BTreeSet};

use arbitrary::Unstructured;

use crate::Point;

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

fn float(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    float_in_range(-1e6, 1e6, u)
}

/// Generate an arbitrary point.
pub fn point(u: &mut Unstructured<'_>) -> Result<Point, arbitrary::Error> {
    Ok(Point::new(float(u)?, float(u)?))
}

fn tick_to_angle(tick: u16) -> f64 {
    tick as f64 / 65536.0 * std::f64::consts::TAU
}

/// Generate a strictly convex polygon with counter-clockwise vertices.
///
/// The vertices sit at distinct, increasing angles on a circle, which
/// makes the polygon convex and the traversal counter-clockwise. At most
/// `max_len` vertices are drawn; there are always at least three.
pub fn convex_polygon(
    max_len: usize,
    u: &mut Unstructured<'_>,
) -> Result<Vec<Point>, arbitrary::Error> {
    let len = u.int_in_range(3..=max_len.max(3) as u32)? as usize;
    let mut ticks: BTreeSet<u16> = BTreeSet::new();
    for _ in 0..len {
        ticks.insert(u.arbitrary()?);
    }
    // Draws can collide; three fixed angles keep this a polygon.
    ticks.extend([0, 21845, 43690]);
    Ok(ticks
        .into_iter()
        .map(|t| {
            let theta = tick_to_angle(t);
            Point::new(100.0 * theta.cos(), 100.0 * theta.sin())
        })
        .collect())
}

/// Generate a simple polygon with counter-clockwise vertices, star-shaped
/// about the origin.
///
/// Like [`convex_polygon`], but each vertex gets its own radius, so the
/// result is usually concave. At most `max_len` vertices are drawn; there
/// are always at least three.
pub fn star_polygon(
    max_len: usize,
    u: &mut Unstructured<'_>,
) -> Result<Vec<Point>, arbitrary::Error> {
    let len = u.int_in_range(3..=max_len.max(3) as u32)? as usize;
    let mut vertices: BTreeMap<u16, f64> = BTreeMap::new();
    for _ in 0..len {
        vertices.insert(u.arbitrary()?, float_in_range(1.0, 100.0, u)?);
    }
    for tick in [0, 21845, 43690] {
        vertices.entry(tick).or_insert(50.0);
    }
    Ok(vertices
        .into_iter()
        .map(|(t, r)| {
            let theta = tick_to_angle(t);
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect())
}
