//! Polygon storage and vertex adjacency.

use crate::geom::Point;
use crate::Error;

/// An index into a polygon's vertex list.
///
/// Throughout this library, vertices are referred to by index rather than
/// by value, so that looking up a vertex's polygon neighbors stays O(1)
/// and so that two vertices with the same coordinates keep distinct
/// identities. (Of course, this index-as-identifier breaks down if there
/// are multiple `Polygon`s in flight. Just be careful not to mix them up.)
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct VertexIdx(pub usize);

impl std::fmt::Debug for VertexIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v_{}", self.0)
    }
}

/// A simple polygon, stored as its vertex list.
///
/// The vertex list is interpreted as a closed cycle: the vertex at index
/// `i` is adjacent to the vertices at `i - 1` and `i + 1`, modulo the
/// vertex count. That adjacency is the only topology the sweep ever uses.
///
/// The vertices are assumed, not checked, to be listed in counter-clockwise
/// order and to describe a non-self-intersecting cycle; see the crate docs
/// for what happens when they don't. A polygon always has at least one
/// vertex.
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon from its vertices, listed in counter-clockwise order.
    ///
    /// Fails with [`Error::Empty`] if there are no vertices.
    pub fn from_cycle<P: Into<Point>>(ps: impl IntoIterator<Item = P>) -> Result<Self, Error> {
        let points: Vec<_> = ps.into_iter().map(|p| p.into()).collect();
        if points.is_empty() {
            return Err(Error::Empty);
        }
        Ok(Polygon { points })
    }

    /// The number of vertices in this polygon. Always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterate over all indices that can be used to index into this polygon.
    pub fn indices(&self) -> impl Iterator<Item = VertexIdx> {
        (0..self.points.len()).map(VertexIdx)
    }

    /// Iterate over all vertices of this polygon, in their original order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// The vertex following `idx` in the polygon's cyclic order.
    pub fn next(&self, idx: VertexIdx) -> VertexIdx {
        VertexIdx((idx.0 + 1) % self.points.len())
    }

    /// The vertex preceding `idx` in the polygon's cyclic order.
    pub fn prev(&self, idx: VertexIdx) -> VertexIdx {
        // An explicit branch; `(idx.0 - 1) % len` would wrap at zero.
        if idx.0 == 0 {
            VertexIdx(self.points.len() - 1)
        } else {
            VertexIdx(idx.0 - 1)
        }
    }

    /// The polygon's vertex indices, sorted by ascending `x` and then
    /// ascending `y`.
    ///
    /// The sort is stable, so vertices with identical coordinates keep
    /// their input order and identical inputs always sweep identically.
    pub fn sweep_order(&self) -> Vec<VertexIdx> {
        let mut order: Vec<VertexIdx> = self.indices().collect();
        order.sort_by(|a, b| self[*a].cmp(&self[*b]));
        order
    }
}

impl std::ops::Index<VertexIdx> for Polygon {
    type Output = Point;

    fn index(&self, index: VertexIdx) -> &Self::Output {
        &self.points[index.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn polygon(ps: &[(f64, f64)]) -> Polygon {
        Polygon::from_cycle(ps.iter().copied()).unwrap()
    }

    #[test]
    fn empty_cycle_is_rejected() {
        let no_points: [(f64, f64); 0] = [];
        assert_matches!(Polygon::from_cycle(no_points), Err(Error::Empty));
    }

    #[test]
    fn adjacency_wraps_around() {
        let p = polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(p.next(VertexIdx(3)), VertexIdx(0));
        assert_eq!(p.prev(VertexIdx(0)), VertexIdx(3));
        assert_eq!(p.next(VertexIdx(1)), VertexIdx(2));
        assert_eq!(p.prev(VertexIdx(2)), VertexIdx(1));
    }

    #[test]
    fn single_vertex_is_its_own_neighbor() {
        let p = polygon(&[(2.0, 3.0)]);
        assert_eq!(p.next(VertexIdx(0)), VertexIdx(0));
        assert_eq!(p.prev(VertexIdx(0)), VertexIdx(0));
    }

    #[test]
    fn sweep_order_sorts_by_x_then_y() {
        let p = polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(
            p.sweep_order(),
            vec![VertexIdx(0), VertexIdx(3), VertexIdx(1), VertexIdx(2)]
        );
    }

    #[test]
    fn sweep_order_keeps_duplicates_in_input_order() {
        let p = polygon(&[(1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (0.0, 2.0)]);
        assert_eq!(
            p.sweep_order(),
            vec![VertexIdx(1), VertexIdx(3), VertexIdx(0), VertexIdx(2)]
        );
    }
}
