//! The left-to-right sweep that builds the upper and lower boundary chains.
//!
//! The sweep visits the polygon's vertices in ascending `(x, y)` order.
//! Two chains grow as it goes: the upper chain collects the vertices on
//! the top boundary and the lower chain the ones on the bottom. For each
//! newly swept vertex, each chain asks its current tip which polygon
//! neighbor comes next in sweep order ([`forward_neighbor`]) and extends
//! itself when the new vertex is that neighbor, or at least as extreme as
//! it, or when the tip has no forward neighbor at all. Assembling the two
//! chains back into one counter-clockwise cycle is [`Chains::contour`].

use crate::geom::Point;
use crate::polygon::{Polygon, VertexIdx};

/// Selects which boundary chain a sweep decision is for.
///
/// The side only matters when a chain tip has both of its polygon
/// neighbors ahead of it in sweep order: the upper chain then prefers the
/// higher neighbor and the lower chain the lower one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ChainSide {
    /// The chain along the top boundary, as seen sweeping left to right.
    Upper,
    /// The chain along the bottom boundary, as seen sweeping left to right.
    Lower,
}

/// The polygon-adjacent neighbor of `from` that comes later in sweep
/// order, or `None` if both neighbors come earlier.
///
/// Let `a` be the cyclic successor of `from` and `b` its predecessor.
/// - If both are behind `from` in sweep order, there is no forward
///   neighbor.
/// - If both are ahead, `side` breaks the tie: `Upper` takes whichever of
///   `a` and `b` has the larger `y`, `Lower` the smaller, with `b`
///   winning an exact `y` tie either way. No point is synthesized on the
///   skipped edge, so around reflex vertices the chain can jump across
///   part of the boundary; see the crate docs.
/// - Otherwise exactly one neighbor is ahead, and comparing `a` against
///   `b` directly picks it: whichever of the two sweeps later is the one
///   still ahead of `from`.
///
/// This function is pure and runs in O(1).
pub fn forward_neighbor(polygon: &Polygon, from: VertexIdx, side: ChainSide) -> Option<VertexIdx> {
    let a = polygon.next(from);
    let b = polygon.prev(from);
    let pa = polygon[a];
    let pb = polygon[b];
    let pf = polygon[from];

    if pa < pf && pb < pf {
        return None;
    }
    if pf < pa && pf < pb {
        let pick = match side {
            ChainSide::Upper => {
                if pa.y > pb.y {
                    a
                } else {
                    b
                }
            }
            ChainSide::Lower => {
                if pa.y < pb.y {
                    a
                } else {
                    b
                }
            }
        };
        return Some(pick);
    }
    Some(if pa < pb { b } else { a })
}

/// The two boundary chains produced by a sweep.
///
/// Both chains start at the first vertex in sweep order, and each chain's
/// entries are in the order the sweep appended them, so their sweep
/// positions never decrease along a chain. A vertex can sit on both
/// chains; the leftmost and rightmost vertices usually do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chains {
    /// Vertices on the top boundary, leftmost first.
    pub upper: Vec<VertexIdx>,
    /// Vertices on the bottom boundary, leftmost first.
    pub lower: Vec<VertexIdx>,
}

impl Chains {
    /// Assembles the chains into a single counter-clockwise cycle.
    ///
    /// The upper chain is emitted tail-first, followed by the interior of
    /// the lower chain. Both chains share their first vertex, and they
    /// typically also end at the same rightmost vertex, so the lower
    /// chain's first and last entries are skipped to avoid emitting
    /// either twice. A lower chain with fewer than two entries
    /// contributes nothing.
    pub fn contour(&self, polygon: &Polygon) -> Vec<Point> {
        let mut ret: Vec<Point> = self.upper.iter().rev().map(|&idx| polygon[idx]).collect();
        if self.lower.len() >= 2 {
            ret.extend(
                self.lower[1..self.lower.len() - 1]
                    .iter()
                    .map(|&idx| polygon[idx]),
            );
        }
        ret
    }
}

/// Runs the sweep, reporting every chain decision to `decision`.
///
/// After seeding both chains with the first vertex in sweep order, each
/// remaining vertex is offered to the upper chain and then to the lower
/// chain; `decision` is called once per offer with the side, the vertex,
/// and whether the chain took it. The observer exists for diagnostics
/// and tests; use [`envelope`] when you don't care.
pub fn sweep(polygon: &Polygon, mut decision: impl FnMut(ChainSide, VertexIdx, bool)) -> Chains {
    let order = polygon.sweep_order();
    let seed = order[0];
    let mut upper = vec![seed];
    let mut lower = vec![seed];

    for &swept in &order[1..] {
        let up_next = forward_neighbor(polygon, upper[upper.len() - 1], ChainSide::Upper);
        let extend_upper = match up_next {
            None => true,
            Some(next) => next == swept || polygon[swept].y >= polygon[next].y,
        };
        decision(ChainSide::Upper, swept, extend_upper);
        if extend_upper {
            upper.push(swept);
        }

        let down_next = forward_neighbor(polygon, lower[lower.len() - 1], ChainSide::Lower);
        let extend_lower = match down_next {
            None => true,
            Some(next) => next == swept || polygon[swept].y <= polygon[next].y,
        };
        decision(ChainSide::Lower, swept, extend_lower);
        if extend_lower {
            lower.push(swept);
        }
    }

    Chains { upper, lower }
}

/// Runs the sweep with no observer.
pub fn envelope(polygon: &Polygon) -> Chains {
    sweep(polygon, |_, _, _| {})
}
