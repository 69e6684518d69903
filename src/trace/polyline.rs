//! Lattice points and traced polylines.

use serde::{Deserialize, Serialize};

/// Integer coordinate at a cell corner of the pixel lattice.
///
/// Corners range over `0..=width` and `0..=height`. Ordering is
/// lexicographic by `x`, then `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct GridPoint {
    pub x: usize,
    pub y: usize,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<[usize; 2]> for GridPoint {
    fn from([x, y]: [usize; 2]) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for [usize; 2] {
    fn from(p: GridPoint) -> Self {
        [p.x, p.y]
    }
}

impl From<(usize, usize)> for GridPoint {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Rotational sense of a closed polyline in image coordinates (y down).
///
/// Traced loops without a junction corner come out counter-clockwise on
/// screen for outer boundaries and clockwise for holes. A loop through a
/// junction corner can carry either sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero enclosed area.
    Degenerate,
}

/// Ordered sequence of lattice points; closed loops repeat the first point
/// at the end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<GridPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last point coincide.
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Twice the shoelace area, exact.
    ///
    /// Negative for counter-clockwise loops in y-down coordinates.
    pub fn twice_signed_area(&self) -> i64 {
        self.segments()
            .map(|(a, b)| a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64)
            .sum()
    }

    pub fn winding(&self) -> Winding {
        match self.twice_signed_area() {
            a if a < 0 => Winding::CounterClockwise,
            a if a > 0 => Winding::Clockwise,
            _ => Winding::Degenerate,
        }
    }

    /// Clockwise loops are hole boundaries.
    ///
    /// Only reliable for loops that do not pass through a junction corner;
    /// figure-eight loops are classified by their net area.
    pub fn is_hole(&self) -> bool {
        self.winding() == Winding::Clockwise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: usize, y: usize) -> Polyline {
        Polyline::new(vec![
            GridPoint::new(x, y),
            GridPoint::new(x, y + 1),
            GridPoint::new(x + 1, y + 1),
            GridPoint::new(x + 1, y),
            GridPoint::new(x, y),
        ])
    }

    #[test]
    fn test_point_ordering() {
        assert!(GridPoint::new(1, 5) < GridPoint::new(2, 0));
        assert!(GridPoint::new(2, 0) < GridPoint::new(2, 1));
    }

    #[test]
    fn test_unit_square_area() {
        let sq = square(2, 2);
        assert!(sq.is_closed());
        assert_eq!(sq.twice_signed_area(), -2);
        assert_eq!(sq.winding(), Winding::CounterClockwise);
        assert!(!sq.is_hole());
    }

    #[test]
    fn test_reversed_is_hole() {
        let mut pts = square(0, 0).into_points();
        pts.reverse();
        let rev = Polyline::new(pts);
        assert_eq!(rev.winding(), Winding::Clockwise);
        assert!(rev.is_hole());
    }

    #[test]
    fn test_open_line_not_closed() {
        let line = Polyline::new(vec![GridPoint::new(0, 0), GridPoint::new(0, 1)]);
        assert!(!line.is_closed());
        assert_eq!(line.winding(), Winding::Degenerate);
    }

    #[test]
    fn test_serde_point_pairs() {
        let line = Polyline::new(vec![GridPoint::new(1, 2), GridPoint::new(3, 4)]);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, "[[1,2],[3,4]]");
        let back: Polyline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
