//! Flat `f32` encoding of polylines for FFI.
//!
//! Format: `[num_polylines, len_1, x1, y1, x2, y2, ..., len_2, ...]`

use crate::trace::Polyline;

/// Flatten polylines into a single `f32` buffer.
pub fn polylines_to_flat(polylines: &[Polyline]) -> Vec<f32> {
    let total: usize = polylines.iter().map(|p| 1 + 2 * p.len()).sum();
    let mut result = Vec::with_capacity(1 + total);
    result.push(polylines.len() as f32);

    for polyline in polylines {
        result.push(polyline.len() as f32);
        for point in polyline.points() {
            result.push(point.x as f32);
            result.push(point.y as f32);
        }
    }

    result
}
