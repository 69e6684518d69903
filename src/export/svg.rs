//! SVG rendering of traced polylines.

use serde::{Deserialize, Serialize};

use crate::trace::Polyline;

/// Paint settings for the SVG writer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Fill color for paths.
    pub fill: String,
    /// Optional stroke color.
    pub stroke: Option<String>,
    pub stroke_width: f32,
    /// Optional background color (adds a rect behind paths).
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            fill: "black".to_string(),
            stroke: None,
            stroke_width: 1.0,
            background: None,
        }
    }
}

/// Path data for one polyline: `M`, then `L` per point, `Z` when closed.
pub fn polyline_to_path(polyline: &Polyline) -> String {
    let points = polyline.points();
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut path = format!("M {},{}", first.x, first.y);
    // A closed loop ends on its start point; `Z` draws that segment.
    let body = if polyline.is_closed() {
        &points[1..points.len() - 1]
    } else {
        &points[1..]
    };
    for p in body {
        path.push_str(&format!(" L {},{}", p.x, p.y));
    }
    if polyline.is_closed() {
        path.push_str(" Z");
    }
    path
}

/// Render polylines as a complete SVG document.
///
/// The viewBox spans the source grid. Each polyline becomes one `<path>`
/// with `fill-rule="evenodd"`, so holes render transparent.
///
/// # Arguments
/// * `polylines` - Traced loops in lattice coordinates
/// * `width` - Grid width in pixels
/// * `height` - Grid height in pixels
/// * `style` - Fill, stroke and background settings
pub fn polylines_to_svg(
    polylines: &[Polyline],
    width: usize,
    height: usize,
    style: &SvgStyle,
) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}px" height="{height}px" viewBox="0 0 {width} {height}">"#
    );
    svg.push('\n');

    if let Some(bg) = &style.background {
        svg.push_str(&format!(
            r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="{bg}"/>"#
        ));
        svg.push('\n');
    }

    // One compound path keeps holes punched through their outer loops.
    let data: Vec<String> = polylines
        .iter()
        .map(polyline_to_path)
        .filter(|d| !d.is_empty())
        .collect();

    if !data.is_empty() {
        svg.push_str("  <path d=\"");
        svg.push_str(&data.join(" "));
        svg.push_str(&format!("\" fill=\"{}\" fill-rule=\"evenodd\"", style.fill));
        if let Some(stroke) = &style.stroke {
            svg.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{:.2}\"",
                stroke, style.stroke_width
            ));
        }
        svg.push_str("/>\n");
    }

    svg.push_str("</svg>\n");
    svg
}
