//! WebAssembly exports for ImageTrace.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Results use
//! the flat float encoding from [`crate::export::flat`].

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::export::polylines_to_flat;
use crate::raster::{threshold_pixels, Threshold};
use crate::trace::{build_boundary_segments, stitch_polylines};

/// Trace an RGBA image into closed polylines.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `threshold` - Channel-mean level below which a pixel is traced (128 by default)
///
/// # Returns
/// `[count, len1, x1, y1, ..., len2, ...]`; `[0]` when nothing was traced.
#[wasm_bindgen]
pub fn trace_rgba_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    threshold: u8,
) -> Result<Vec<f32>, JsValue> {
    let input = Array3::from_shape_vec((height, width, 4), data.to_vec())
        .map_err(|e| JsValue::from_str(&format!("invalid dimensions: {e}")))?;

    let grid = threshold_pixels(input.view(), Threshold::new(threshold))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let edges = build_boundary_segments(&grid);
    Ok(polylines_to_flat(&stitch_polylines(&edges)))
}

/// Byte count a `width` x `height` mask must have.
fn mask_len(width: usize, height: usize, actual: usize) -> Result<usize, String> {
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| format!("invalid dimensions: {width} x {height} overflows"))?;
    if actual != expected {
        return Err(format!(
            "invalid dimensions: expected {expected} bytes, got {actual}"
        ));
    }
    Ok(expected)
}

/// Trace a single-channel mask where any non-zero byte is foreground.
#[wasm_bindgen]
pub fn trace_mask_wasm(mask: &[u8], width: usize, height: usize) -> Result<Vec<f32>, JsValue> {
    mask_len(width, height, mask.len()).map_err(|e| JsValue::from_str(&e))?;

    let grid = crate::raster::OccupancyGrid::from_fn(width, height, |x, y| mask[y * width + x] > 0);
    let edges = build_boundary_segments(&grid);
    Ok(polylines_to_flat(&stitch_polylines(&edges)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_len_matches() {
        assert_eq!(mask_len(3, 2, 6), Ok(6));
        assert!(mask_len(3, 2, 5).unwrap_err().contains("expected 6 bytes"));
    }

    #[test]
    fn test_mask_len_overflow() {
        let err = mask_len(usize::MAX, 2, 0).unwrap_err();
        assert!(err.contains("overflows"), "{err}");
    }
}
