//! Reassemble boundary edges into closed polylines.
//!
//! Builds an undirected point-adjacency index over the edge set and walks
//! unused edges greedily: extend from the tail, then from the head, until no
//! unused edge touches either end. Each lattice edge is consumed once.
//!
//! At a corner shared by four boundary edges (two regions touching
//! diagonally) the walk takes the first unused neighbor in insertion order.
//! That choice is deterministic but may join what a viewer sees as two
//! separate loops, and the joined loop can walk some edges against their
//! emitted direction.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, warn};

use super::polyline::{GridPoint, Polyline};
use super::segments::{DirectedEdge, EdgeKey};

/// Neighbors of each lattice point, in edge insertion order.
type Adjacency = HashMap<GridPoint, Vec<GridPoint>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum End {
    Tail,
    Head,
}

fn build_adjacency(edges: &[DirectedEdge]) -> Adjacency {
    let mut adjacency: Adjacency = HashMap::with_capacity(edges.len());
    for edge in edges {
        adjacency.entry(edge.from).or_default().push(edge.to);
        adjacency.entry(edge.to).or_default().push(edge.from);
    }
    adjacency
}

/// Grow `chain` from one end while an unused edge continues it.
fn extend(
    chain: &mut VecDeque<GridPoint>,
    unused: &mut HashSet<EdgeKey>,
    adjacency: &Adjacency,
    end: End,
) {
    loop {
        let current = match end {
            End::Tail => chain.back(),
            End::Head => chain.front(),
        };
        let Some(&current) = current else {
            return;
        };
        let Some(neighbors) = adjacency.get(&current) else {
            return;
        };

        let next = neighbors
            .iter()
            .copied()
            .find(|&candidate| unused.remove(&EdgeKey::new(current, candidate)));

        match (next, end) {
            (Some(p), End::Tail) => chain.push_back(p),
            (Some(p), End::Head) => chain.push_front(p),
            (None, _) => return,
        }
    }
}

/// Partition the edge set into closed polylines.
///
/// Seeds are taken in edge order and each polyline starts in its seed's
/// direction, so loops without a junction corner keep the winding the
/// segment builder produced. Through a junction the loop set depends on
/// which edge seeds first: emission order splits `.#\n#.` into two squares,
/// while other orders can merge them. Output is repeatable only because the
/// seed order is fixed. Chains that never grow past a single edge are
/// dropped.
///
/// # Returns
/// Polylines whose last point repeats the first; empty for an empty edge set.
pub fn stitch_polylines(edges: &[DirectedEdge]) -> Vec<Polyline> {
    let adjacency = build_adjacency(edges);
    let mut unused: HashSet<EdgeKey> = edges.iter().map(DirectedEdge::key).collect();
    let mut polylines = Vec::new();

    for seed in edges {
        if unused.is_empty() {
            break;
        }
        if !unused.remove(&seed.key()) {
            continue;
        }

        let mut chain = VecDeque::from([seed.from, seed.to]);
        extend(&mut chain, &mut unused, &adjacency, End::Tail);
        extend(&mut chain, &mut unused, &adjacency, End::Head);

        if chain.len() <= 2 {
            debug!("dropping isolated edge {:?} -> {:?}", seed.from, seed.to);
            continue;
        }

        let first = chain[0];
        if chain.back() != Some(&first) {
            warn!(
                "chain from {:?} ran out of edges after {} points; closing across a gap",
                first,
                chain.len()
            );
            chain.push_back(first);
        }

        polylines.push(Polyline::new(chain.into()));
    }

    polylines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::build_boundary_segments;

    fn p(x: usize, y: usize) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn test_empty() {
        assert!(stitch_polylines(&[]).is_empty());
    }

    #[test]
    fn test_unit_square() {
        let edges = vec![
            DirectedEdge::new((2, 2), (2, 3)),
            DirectedEdge::new((3, 3), (3, 2)),
            DirectedEdge::new((3, 2), (2, 2)),
            DirectedEdge::new((2, 3), (3, 3)),
        ];
        let polylines = stitch_polylines(&edges);
        assert_eq!(polylines.len(), 1);
        assert_eq!(
            polylines[0].points(),
            &[p(2, 2), p(2, 3), p(3, 3), p(3, 2), p(2, 2)]
        );
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut edges = vec![
            DirectedEdge::new((0, 0), (0, 1)),
            DirectedEdge::new((0, 1), (1, 1)),
            DirectedEdge::new((1, 1), (1, 0)),
            DirectedEdge::new((1, 0), (0, 0)),
        ];
        edges.push(edges[1].reversed());
        let polylines = stitch_polylines(&edges);
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].len(), 5);
    }

    #[test]
    fn test_lone_edge_dropped() {
        let edges = vec![DirectedEdge::new((0, 0), (0, 1))];
        assert!(stitch_polylines(&edges).is_empty());
    }

    #[test]
    fn test_open_chain_is_closed_across_gap() {
        let edges = vec![
            DirectedEdge::new((0, 0), (0, 1)),
            DirectedEdge::new((0, 1), (1, 1)),
        ];
        let polylines = stitch_polylines(&edges);
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].points(), &[p(0, 0), p(0, 1), p(1, 1), p(0, 0)]);
    }

    #[test]
    fn test_backward_extension() {
        // Seed sits mid-chain; the head must grow backwards.
        let edges = vec![
            DirectedEdge::new((0, 1), (0, 2)),
            DirectedEdge::new((0, 0), (0, 1)),
            DirectedEdge::new((0, 2), (0, 3)),
        ];
        let polylines = stitch_polylines(&edges);
        assert_eq!(polylines.len(), 1);
        assert_eq!(
            polylines[0].points(),
            &[p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 0)]
        );
    }

    #[test]
    fn test_diagonal_pixels_split_at_shared_corner() {
        let grid: crate::raster::OccupancyGrid = "#.\n.#".parse().unwrap();
        let edges = build_boundary_segments(&grid);
        assert_eq!(edges.len(), 8);

        let polylines = stitch_polylines(&edges);
        assert_eq!(polylines.len(), 2);
        assert_eq!(
            polylines[0].points(),
            &[p(0, 0), p(0, 1), p(1, 1), p(1, 0), p(0, 0)]
        );
        assert_eq!(
            polylines[1].points(),
            &[p(1, 1), p(1, 2), p(2, 2), p(2, 1), p(1, 1)]
        );
    }

    #[test]
    fn test_seed_order_decides_junction_split() {
        let grid: crate::raster::OccupancyGrid = ".#\n#.".parse().unwrap();
        let edges = build_boundary_segments(&grid);
        assert_eq!(stitch_polylines(&edges).len(), 2);

        // Seeding from the last emitted edge walks into the junction from
        // below and leaves through the upper square.
        let mut rotated = edges.clone();
        rotated.rotate_right(1);
        let merged = stitch_polylines(&rotated);
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].points(),
            &[
                p(0, 2),
                p(1, 2),
                p(1, 1),
                p(1, 0),
                p(2, 0),
                p(2, 1),
                p(1, 1),
                p(0, 1),
                p(0, 2),
            ]
        );
    }

    #[test]
    fn test_junction_loop_mixes_directions() {
        let grid: crate::raster::OccupancyGrid = "#.#\n##.".parse().unwrap();
        let edges = build_boundary_segments(&grid);
        assert_eq!(edges.len(), 12);

        let polylines = stitch_polylines(&edges);
        assert_eq!(polylines.len(), 1);
        let figure_eight = &polylines[0];
        assert_eq!(
            figure_eight.points(),
            &[
                p(0, 0),
                p(0, 1),
                p(0, 2),
                p(1, 2),
                p(2, 2),
                p(2, 1),
                p(2, 0),
                p(3, 0),
                p(3, 1),
                p(2, 1),
                p(1, 1),
                p(1, 0),
                p(0, 0),
            ]
        );

        // Four cells would give -8; the right-hand lobe is walked backwards.
        assert_eq!(figure_eight.twice_signed_area(), -4);
        let emitted: HashSet<DirectedEdge> = edges.iter().copied().collect();
        let forward = figure_eight
            .segments()
            .filter(|&(a, b)| emitted.contains(&DirectedEdge::new(a, b)))
            .count();
        assert_eq!(forward, 8);
    }
}
