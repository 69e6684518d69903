//! Raster input for the tracer.
//!
//! This module turns pixels into the binary occupancy grid the tracer consumes:
//! - **Occupancy grid**: immutable foreground/background matrix
//! - **Threshold**: mean-of-RGB classification of `ndarray` pixel buffers
//! - **I/O**: decoding image files through the `image` crate
//!
//! Grids are stored as `Array2<bool>` with shape (height, width), indexed
//! `[[y, x]]` like the rest of the crate's pixel buffers.

pub mod io;
pub mod threshold;

pub use io::load_grid;
pub use threshold::{threshold_pixels, Threshold};

use std::str::FromStr;

use ndarray::{Array2, ArrayView2};

use crate::error::{Result, TraceError};

/// Glyph for a foreground cell in ASCII grids.
const FOREGROUND_GLYPH: char = '#';
/// Glyph for a background cell in ASCII grids.
const BACKGROUND_GLYPH: char = '.';

/// Binary foreground/background classification of an image.
///
/// `true` marks a foreground ("traced", black) cell. The grid is immutable
/// once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Array2<bool>,
}

impl OccupancyGrid {
    /// All-background grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), false),
        }
    }

    /// Wrap an existing (height, width) boolean array.
    pub fn from_array(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        Self {
            cells: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Parse an ASCII grid: `#` is foreground, `.` is background.
    ///
    /// Blank lines and leading/trailing whitespace are ignored. All rows must
    /// have the same length.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows: Vec<Vec<bool>> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let row = line
                .chars()
                .map(|c| match c {
                    FOREGROUND_GLYPH => Ok(true),
                    BACKGROUND_GLYPH => Ok(false),
                    other => Err(TraceError::parse(idx + 1, format!("unexpected glyph {other:?}"))),
                })
                .collect::<Result<Vec<bool>>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(TraceError::parse(
                        idx + 1,
                        format!("row has {} cells, expected {}", row.len(), first.len()),
                    ));
                }
            }
            rows.push(row);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let cells = Array2::from_shape_vec((height, width), rows.into_iter().flatten().collect())
            .map_err(|e| TraceError::parse(0, e.to_string()))?;

        Ok(Self { cells })
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell state; coordinates outside the grid read as background.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells.get((y, x)).copied().unwrap_or(false)
    }

    /// Same as [`get`](Self::get) for signed coordinates.
    #[inline]
    pub fn is_foreground(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize)
    }

    /// Number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Borrow the underlying (height, width) array.
    pub fn view(&self) -> ArrayView2<'_, bool> {
        self.cells.view()
    }
}

impl FromStr for OccupancyGrid {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
