#![allow(dead_code)]

use std::collections::HashSet;

use imagetrace::trace::{EdgeKey, GridPoint, Polyline};
use imagetrace::OccupancyGrid;

/// 3x3 block with its centre cell cleared, padded by one background cell.
pub fn ring() -> OccupancyGrid {
    "
    .....
    .###.
    .#.#.
    .###.
    .....
    "
    .parse()
    .expect("ring fixture")
}

/// Deterministic pseudo-random mask (LCG), roughly `density` percent foreground.
pub fn speckle(width: usize, height: usize, seed: u64, density: u64) -> OccupancyGrid {
    let mut state = seed;
    let mut cells = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        cells.push((state >> 33) % 100 < density);
    }
    OccupancyGrid::from_fn(width, height, |x, y| cells[y * width + x])
}

/// Checkerboard of single cells; every interior corner joins four edges.
pub fn checkerboard(width: usize, height: usize) -> OccupancyGrid {
    OccupancyGrid::from_fn(width, height, |x, y| (x + y) % 2 == 0)
}

/// Edge keys walked by all polylines, in order, duplicates kept.
pub fn walked_keys(polylines: &[Polyline]) -> Vec<EdgeKey> {
    polylines
        .iter()
        .flat_map(|p| p.segments().map(|(a, b)| EdgeKey::new(a, b)))
        .collect()
}

/// Loop without its closing repeat, rotated to start at its smallest point
/// and read in whichever direction compares smaller.
pub fn canonical_loop(polyline: &Polyline) -> Vec<GridPoint> {
    let mut pts = polyline.points().to_vec();
    if polyline.is_closed() {
        pts.pop();
    }

    let rotate_min = |mut v: Vec<GridPoint>| {
        if let Some(idx) = v.iter().enumerate().min_by_key(|(_, p)| **p).map(|(i, _)| i) {
            v.rotate_left(idx);
        }
        v
    };

    let forward = rotate_min(pts.clone());
    pts.reverse();
    let backward = rotate_min(pts);
    forward.min(backward)
}

pub fn canonical_set(polylines: &[Polyline]) -> HashSet<Vec<GridPoint>> {
    polylines.iter().map(canonical_loop).collect()
}
