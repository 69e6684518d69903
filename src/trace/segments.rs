//! Boundary segment extraction.
//!
//! Every foreground cell emits one directed unit edge per side that faces
//! background or the grid border. Sides shared by two foreground cells are
//! skipped by both cells, so interior edges cancel without a labeling pass.
//!
//! Edge direction keeps the foreground on a fixed side: walking an outer
//! boundary goes counter-clockwise on screen (y down), a hole clockwise.

use crate::raster::OccupancyGrid;

use super::polyline::GridPoint;

/// Oriented unit-length boundary segment between two lattice points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    pub from: GridPoint,
    pub to: GridPoint,
}

/// Direction-independent identity of a lattice edge.
///
/// Endpoints are stored in lexicographic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(GridPoint, GridPoint);

impl EdgeKey {
    pub fn new(a: GridPoint, b: GridPoint) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn endpoints(&self) -> (GridPoint, GridPoint) {
        (self.0, self.1)
    }
}

impl DirectedEdge {
    #[inline]
    pub fn new(from: impl Into<GridPoint>, to: impl Into<GridPoint>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    #[inline]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.from, self.to)
    }

    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Axis-aligned with length one.
    pub fn is_unit(&self) -> bool {
        self.from.x.abs_diff(self.to.x) + self.from.y.abs_diff(self.to.y) == 1
    }
}

/// Collect the boundary edges of every foreground region.
///
/// Cells are visited row by row; each foreground cell checks its left,
/// right, top and bottom sides in that order:
///
/// | Side   | Emitted edge              |
/// |--------|---------------------------|
/// | left   | `(x, y) → (x, y+1)`       |
/// | right  | `(x+1, y+1) → (x+1, y)`   |
/// | top    | `(x+1, y) → (x, y)`       |
/// | bottom | `(x, y+1) → (x+1, y+1)`   |
///
/// # Returns
/// Edges in emission order; empty when the grid has no foreground.
pub fn build_boundary_segments(grid: &OccupancyGrid) -> Vec<DirectedEdge> {
    let width = grid.width();
    let height = grid.height();
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if !grid.get(x, y) {
                continue;
            }

            if x == 0 || !grid.get(x - 1, y) {
                edges.push(DirectedEdge::new((x, y), (x, y + 1)));
            }
            if x == width - 1 || !grid.get(x + 1, y) {
                edges.push(DirectedEdge::new((x + 1, y + 1), (x + 1, y)));
            }
            if y == 0 || !grid.get(x, y - 1) {
                edges.push(DirectedEdge::new((x + 1, y), (x, y)));
            }
            if y == height - 1 || !grid.get(x, y + 1) {
                edges.push(DirectedEdge::new((x, y + 1), (x + 1, y + 1)));
            }
        }
    }

    edges
}
