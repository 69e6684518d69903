//! Pixel-edge contour tracing.
//!
//! Converts an occupancy grid into closed polylines along cell boundaries:
//! - **Segments**: one directed unit edge per exposed foreground cell side
//! - **Stitching**: greedy reassembly of those edges into closed loops
//!
//! Output coordinates are exact lattice corners. A loop that never passes a
//! junction corner (four boundary edges meeting where regions touch
//! diagonally) winds counter-clockwise if it is an outer boundary and
//! clockwise if it is a hole (y down). Loops through a junction can walk some
//! edges backwards or merge diagonal neighbours into one figure-eight, so
//! their signed area is not the cell count. An even-odd fill is correct for
//! every output.

pub mod polyline;
pub mod segments;
pub mod stitch;

pub use polyline::{GridPoint, Polyline, Winding};
pub use segments::{build_boundary_segments, DirectedEdge, EdgeKey};
pub use stitch::stitch_polylines;

use log::debug;
use rayon::prelude::*;

use crate::error::{Result, TraceError};
use crate::raster::OccupancyGrid;

/// Trace every foreground region of `grid`.
///
/// # Returns
/// The closed polylines, or [`TraceError::NoForeground`] when nothing was
/// traced.
pub fn trace_grid(grid: &OccupancyGrid) -> Result<Vec<Polyline>> {
    let edges = build_boundary_segments(grid);
    let polylines = stitch_polylines(&edges);

    debug!(
        "traced {}x{} grid: {} boundary edges, {} polylines",
        grid.width(),
        grid.height(),
        edges.len(),
        polylines.len()
    );

    if polylines.is_empty() {
        return Err(TraceError::NoForeground);
    }
    Ok(polylines)
}

/// Trace independent grids in parallel.
///
/// Results are returned in input order.
pub fn trace_batch(grids: &[OccupancyGrid]) -> Vec<Result<Vec<Polyline>>> {
    grids.par_iter().map(trace_grid).collect()
}
