//! Fit traced polylines into a sketch of a given physical width.
//!
//! The traced lattice is shifted so its bounding box starts at the origin,
//! scaled uniformly so its width matches the target, and flipped vertically
//! (image y grows down, sketch y grows up). Each consecutive point pair
//! becomes one straight sketch line.

use log::debug;
use serde::Serialize;

use crate::error::{Result, TraceError};
use crate::trace::Polyline;

/// Axis-aligned bounds of a polyline set, in lattice units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl Bounds {
    /// Bounds over every point of every polyline; `None` when there are no points.
    pub fn of(polylines: &[Polyline]) -> Option<Self> {
        let mut points = polylines.iter().flat_map(|p| p.points().iter());
        let first = points.next()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y
    }
}

/// Straight line in sketch coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SketchLine {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Polylines laid out as scaled sketch lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sketch {
    pub lines: Vec<SketchLine>,
    /// Sketch units per lattice unit.
    pub scale: f64,
    pub polyline_count: usize,
}

/// Scale polylines so the traced width equals `target_width`.
///
/// # Errors
/// * [`TraceError::NoForeground`] - no points to lay out
/// * [`TraceError::ZeroWidth`] - every point shares one X coordinate
/// * [`TraceError::Config`] - `target_width` is not a positive finite number
pub fn fit_to_width(polylines: &[Polyline], target_width: f64) -> Result<Sketch> {
    if !(target_width.is_finite() && target_width > 0.0) {
        return Err(TraceError::config(format!(
            "target width must be positive, got {target_width}"
        )));
    }

    let bounds = Bounds::of(polylines).ok_or(TraceError::NoForeground)?;
    if bounds.width() == 0 {
        return Err(TraceError::ZeroWidth);
    }

    let scale = target_width / bounds.width() as f64;
    let map = |x: usize, y: usize| {
        (
            (x - bounds.min_x) as f64 * scale,
            -((y - bounds.min_y) as f64) * scale,
        )
    };

    let lines: Vec<SketchLine> = polylines
        .iter()
        .filter(|p| p.len() >= 2)
        .flat_map(|p| p.segments())
        .map(|(a, b)| SketchLine {
            start: map(a.x, a.y),
            end: map(b.x, b.y),
        })
        .collect();

    debug!(
        "sketch: {} lines, bounds {}x{}, scale {scale:.6}",
        lines.len(),
        bounds.width(),
        bounds.height()
    );

    Ok(Sketch {
        lines,
        scale,
        polyline_count: polylines.len(),
    })
}
