//! ImageTrace
//!
//! Converts thresholded bitmaps into closed polylines that follow pixel
//! edges, for handing to CAD sketches or vector exporters. Python bindings
//! are available via PyO3 and JavaScript bindings via WASM.
//!
//! ## Pipeline
//! 1. **Threshold**: pixels whose `(R + G + B) / 3` is below 128 become
//!    foreground cells of an [`raster::OccupancyGrid`].
//! 2. **Segments**: every foreground cell side facing background emits one
//!    directed unit edge ([`trace::build_boundary_segments`]).
//! 3. **Stitching**: edges are chained into closed loops, each edge used
//!    once ([`trace::stitch_polylines`]).
//!
//! Coordinates are integer lattice corners in image space (y down). Loops
//! with no junction corner (a corner shared by four boundary edges) wind
//! counter-clockwise for outer boundaries and clockwise for holes. Loops
//! through a junction may mix directions, so use an even-odd fill rather
//! than relying on winding.
//!
//! ## Consumers
//! [`sketch`] fits loops to a physical width for CAD-style output and
//! [`export`] renders them as SVG, JSON or a flat `f32` buffer.

pub mod config;
pub mod error;
pub mod export;
pub mod raster;
pub mod sketch;
pub mod trace;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, TraceError};
pub use raster::OccupancyGrid;
pub use trace::{
    build_boundary_segments, stitch_polylines, trace_grid, DirectedEdge, GridPoint, Polyline,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray1, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::export::polylines_to_flat;
    use crate::raster::{threshold_pixels, OccupancyGrid, Threshold};
    use crate::trace::{trace_grid, Polyline};

    fn to_py_err(err: crate::TraceError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn as_tuples(polylines: Vec<Polyline>) -> Vec<Vec<(usize, usize)>> {
        polylines
            .into_iter()
            .map(|p| p.points().iter().map(|pt| (pt.x, pt.y)).collect())
            .collect()
    }

    fn trace_pixels(
        image: PyReadonlyArray3<'_, u8>,
        threshold: u8,
        invert: bool,
    ) -> PyResult<Vec<Polyline>> {
        let grid = threshold_pixels(
            image.as_array(),
            Threshold {
                level: threshold,
                invert,
            },
        )
        .map_err(to_py_err)?;
        trace_grid(&grid).map_err(to_py_err)
    }

    /// Trace an image (H, W, 1|3|4) into closed polylines.
    ///
    /// Returns a list of polylines, each a list of `(x, y)` corner tuples.
    /// Raises `ValueError` when nothing is traced.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=128, invert=false))]
    pub fn trace_image(
        image: PyReadonlyArray3<'_, u8>,
        threshold: u8,
        invert: bool,
    ) -> PyResult<Vec<Vec<(usize, usize)>>> {
        trace_pixels(image, threshold, invert).map(as_tuples)
    }

    /// Trace an image and return the flat float encoding.
    ///
    /// Format: `[count, len1, x1, y1, ..., len2, ...]`.
    #[pyfunction]
    #[pyo3(signature = (image, threshold=128, invert=false))]
    pub fn trace_image_flat<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        threshold: u8,
        invert: bool,
    ) -> PyResult<Bound<'py, PyArray1<f32>>> {
        let polylines = trace_pixels(image, threshold, invert)?;
        Ok(polylines_to_flat(&polylines).into_pyarray(py))
    }

    /// Trace a boolean mask (H, W) where `True` is foreground.
    #[pyfunction]
    pub fn trace_mask(mask: PyReadonlyArray2<'_, bool>) -> PyResult<Vec<Vec<(usize, usize)>>> {
        let grid = OccupancyGrid::from_array(mask.as_array().to_owned());
        trace_grid(&grid).map(as_tuples).map_err(to_py_err)
    }

    /// Python module definition
    #[pymodule]
    pub fn imagetrace(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(trace_image, m)?)?;
        m.add_function(wrap_pyfunction!(trace_image_flat, m)?)?;
        m.add_function(wrap_pyfunction!(trace_mask, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::imagetrace;
