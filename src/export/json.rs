//! JSON document of traced polylines.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};
use crate::sketch::Sketch;
use crate::trace::Polyline;

/// Serialized trace: grid size plus polylines as `[[x, y], ...]` arrays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceDocument {
    pub width: usize,
    pub height: usize,
    pub polylines: Vec<Polyline>,
}

/// Pretty-printed JSON for a trace.
pub fn to_json(polylines: &[Polyline], width: usize, height: usize) -> Result<String> {
    let doc = TraceDocument {
        width,
        height,
        polylines: polylines.to_vec(),
    };
    serde_json::to_string_pretty(&doc)
        .map_err(|e| TraceError::config(format!("failed to serialize trace: {e}")))
}

/// Pretty-printed JSON for a fitted sketch: scaled, Y-flipped line list.
pub fn sketch_to_json(sketch: &Sketch) -> Result<String> {
    serde_json::to_string_pretty(sketch)
        .map_err(|e| TraceError::config(format!("failed to serialize sketch: {e}")))
}

/// Write `contents` to `path`, creating parent directories.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TraceError::io(parent, e))?;
        }
    }
    fs::write(path, contents).map_err(|e| TraceError::io(path, e))
}
