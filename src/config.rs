//! Runtime configuration loaded from JSON.
//!
//! Every field has a default, so an empty object `{}` is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};
use crate::export::SvgStyle;
use crate::raster::threshold::{Threshold, DEFAULT_LEVEL};

/// Sketch width used when none is configured, in metres.
pub const DEFAULT_TARGET_WIDTH: f64 = 0.3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Channel-mean level below which a pixel is foreground (0-255).
    pub threshold: u8,
    /// Trace light regions instead of dark ones.
    pub invert: bool,
    /// Width of the fitted sketch, in sketch units.
    pub target_width: f64,
    pub svg: SvgStyle,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_LEVEL,
            invert: false,
            target_width: DEFAULT_TARGET_WIDTH,
            svg: SvgStyle::default(),
        }
    }
}

impl TraceConfig {
    pub fn threshold(&self) -> Threshold {
        Threshold {
            level: self.threshold,
            invert: self.invert,
        }
    }

    /// Reject values the pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        if !(self.target_width.is_finite() && self.target_width > 0.0) {
            return Err(TraceError::config(format!(
                "target_width must be positive, got {}",
                self.target_width
            )));
        }
        if !(self.svg.stroke_width.is_finite() && self.svg.stroke_width >= 0.0) {
            return Err(TraceError::config("svg.stroke_width must be non-negative"));
        }
        Ok(())
    }
}

/// Load and validate a JSON config file.
pub fn load_config(path: &Path) -> Result<TraceConfig> {
    let data = fs::read_to_string(path).map_err(|e| TraceError::io(path, e))?;
    let config: TraceConfig = serde_json::from_str(&data)
        .map_err(|e| TraceError::config(format!("{}: {e}", path.display())))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: TraceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TraceConfig::default());
        assert_eq!(config.threshold(), Threshold::default());
        assert_eq!(config.target_width, 0.3);
        assert_eq!(config.svg.fill, "black");
    }

    #[test]
    fn test_partial_override() {
        let config: TraceConfig =
            serde_json::from_str(r#"{"threshold": 200, "svg": {"stroke": "blue"}}"#).unwrap();
        assert_eq!(config.threshold, 200);
        assert!(!config.invert);
        assert_eq!(config.svg.stroke.as_deref(), Some("blue"));
        assert_eq!(config.svg.fill, "black");
    }

    #[test]
    fn test_load_rejects_bad_width() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, r#"{"target_width": -1.0}"#).unwrap();
        assert!(matches!(load_config(&path), Err(TraceError::Config { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/trace.json")).unwrap_err();
        assert!(matches!(err, TraceError::Io { .. }));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(&path), Err(TraceError::Config { .. })));
    }
}
