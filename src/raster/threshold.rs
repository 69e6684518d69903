//! Binary threshold from pixel buffers to an occupancy grid.
//!
//! A pixel is foreground when the integer mean of its color channels is
//! below the threshold level (dark ink on light paper):
//! - **Grayscale**: (height, width, 1) - the single channel is the mean
//! - **RGB**: (height, width, 3) - `(R + G + B) / 3`
//! - **RGBA**: (height, width, 4) - `(R + G + B) / 3`, alpha ignored
//!
//! Rows are classified in parallel with Rayon.

use ndarray::{Array2, ArrayView3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::OccupancyGrid;
use crate::error::{Result, TraceError};

/// Default threshold level (0-255).
pub const DEFAULT_LEVEL: u8 = 128;

/// Threshold parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Pixels whose channel mean is strictly below this level are foreground.
    pub level: u8,
    /// Swap foreground and background after classification.
    pub invert: bool,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            invert: false,
        }
    }
}

impl Threshold {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            invert: false,
        }
    }

    /// Classify a single channel mean.
    #[inline]
    pub fn is_foreground(&self, mean: u8) -> bool {
        (mean < self.level) != self.invert
    }
}

/// Integer mean of the three color channels.
#[inline]
fn channel_mean(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Threshold a pixel buffer into an occupancy grid.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `threshold` - Level and inversion flag
///
/// # Returns
/// Occupancy grid of the same width and height, or
/// [`TraceError::UnsupportedChannels`] for any other channel count.
pub fn threshold_pixels(input: ArrayView3<u8>, threshold: Threshold) -> Result<OccupancyGrid> {
    let (height, width, channels) = input.dim();
    if !matches!(channels, 1 | 3 | 4) {
        return Err(TraceError::UnsupportedChannels(channels));
    }

    let cells: Vec<bool> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            (0..width).map(move |x| {
                let mean = if channels == 1 {
                    input[[y, x, 0]]
                } else {
                    channel_mean(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]])
                };
                threshold.is_foreground(mean)
            })
        })
        .collect();

    let cells = Array2::from_shape_vec((height, width), cells)
        .map_err(|e| TraceError::config(format!("threshold output shape: {e}")))?;
    Ok(OccupancyGrid::from_array(cells))
}
