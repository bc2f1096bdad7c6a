#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
mod geom;
mod num;
mod polygon;
pub mod sweep;

#[cfg(feature = "generators")]
pub mod generators;

pub use geom::Point;
pub use polygon::{Polygon, VertexIdx};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// The input points were faulty.
pub enum Error {
    /// The polygon had no vertices.
    Empty,
    /// At least one of the inputs was infinite.
    Infinity,
    /// At least one of the inputs was not a number.
    NaN,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Empty => write!(f, "the polygon had no vertices"),
            Error::Infinity => write!(f, "one of the inputs was infinite"),
            Error::NaN => write!(f, "one of the inputs had a NaN"),
        }
    }
}

impl std::error::Error for Error {}

/// Reduces a simple polygon to its upper and lower boundary chains.
///
/// `points` are the polygon's vertices, listed in counter-clockwise order
/// and interpreted as a closed cycle. The result is a subsequence of the
/// input, arranged counter-clockwise: the upper chain traversed right to
/// left, then the interior of the lower chain left to right.
///
/// The input is screened for emptiness and non-finite coordinates, which
/// would otherwise break the sweep's ordering; anything beyond that is
/// the caller's contract. A polygon that is not simple, or not
/// counter-clockwise, produces an unspecified (but memory-safe and
/// deterministic) result rather than an error.
pub fn reduce(
    points: impl IntoIterator<Item = impl Into<Point>>,
) -> Result<Vec<Point>, Error> {
    let points: Vec<Point> = points.into_iter().map(|p| p.into()).collect();

    // A NaN coordinate would make the sweep's comparisons lie, so reject
    // it up front rather than producing a scrambled order.
    if points.iter().any(|p| p.x.is_infinite() || p.y.is_infinite()) {
        return Err(Error::Infinity);
    }
    if points.iter().any(|p| p.x.is_nan() || p.y.is_nan()) {
        return Err(Error::NaN);
    }

    let polygon = Polygon::from_cycle(points)?;
    Ok(sweep::envelope(&polygon).contour(&polygon))
}
