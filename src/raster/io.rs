//! Image file decoding.
//!
//! - `load_grid`: read a PNG/JPEG/etc. and threshold it into an occupancy grid.
//! - `decode_grid`: same for an already decoded `DynamicImage`.

use std::path::Path;

use image::DynamicImage;
use log::debug;
use ndarray::Array3;

use super::{threshold_pixels, OccupancyGrid, Threshold};
use crate::error::{Result, TraceError};

/// Load an image from disk and threshold it.
pub fn load_grid(path: &Path, threshold: Threshold) -> Result<OccupancyGrid> {
    if !path.is_file() {
        return Err(TraceError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "image file not found"),
        ));
    }

    let img = image::open(path)?;
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    decode_grid(&img, threshold)
}

/// Threshold a decoded image via its RGB8 representation.
pub fn decode_grid(img: &DynamicImage, threshold: Threshold) -> Result<OccupancyGrid> {
    let rgb = img.to_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let pixels = Array3::from_shape_vec((height, width, 3), rgb.into_raw())
        .map_err(|e| TraceError::config(format!("decoded buffer shape: {e}")))?;
    threshold_pixels(pixels.view(), threshold)
}
