//! Writers for traced polylines.
//!
//! - **SVG**: compound even-odd path over the grid's viewBox
//! - **JSON**: grid size plus `[[x, y], ...]` point arrays, or a fitted sketch
//! - **Flat**: `f32` buffer used by the Python and WASM bindings

pub mod flat;
pub mod json;
pub mod svg;

pub use flat::polylines_to_flat;
pub use json::{sketch_to_json, to_json, write_text, TraceDocument};
pub use svg::{polylines_to_svg, SvgStyle};
