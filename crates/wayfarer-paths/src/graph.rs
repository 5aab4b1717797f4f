use std::collections::HashMap;

use indexmap::IndexMap;
use smallvec::SmallVec;
use wayfarer_core::{Point, TileKind};
use wayfarer_map::TileGrid;

use crate::traits::{Pather, WeightedPather};

/// Weight of an orthogonal step, in hundredths of a tile.
pub const STRAIGHT_COST: i32 = 100;

/// Weight of a diagonal step, in hundredths of a tile.
pub const DIAGONAL_COST: i32 = 141;

type Successors = SmallVec<[Point; 8]>;

/// Directed weighted adjacency derived from a [`TileGrid`].
///
/// Every interior coordinate is a key of the graph. Only
/// [`TileKind::Empty`] tiles have outgoing edges; blocked tiles, warps and
/// the padding ring may still be targets.
///
/// Movement rules:
///
/// - orthogonal `Empty → Empty` edges go both ways, `Empty → WarpPoint` only
///   one way;
/// - a diagonal `Empty → Empty` edge exists only when both corner tiles it
///   cuts past are `Empty` as well. The crossing diagonal of the same 2×2
///   block is added at the same time.
///
/// Diagonal steps into a warp are never generated.
#[derive(Debug, Clone, Default)]
pub struct MoveGraph {
    weights: HashMap<(Point, Point), i32>,
    successors: IndexMap<Point, Successors>,
}

impl MoveGraph {
    /// Derive the movement graph of `grid`.
    ///
    /// # Panics
    ///
    /// Panics if an interior tile is still [`TileKind::Unknown`] or is
    /// [`TileKind::EndOfMap`], which a finished grid never contains.
    pub fn build(grid: &TileGrid) -> Self {
        let mut g = Self::default();
        for p in grid.interior() {
            let kind = grid.kind_at(p);
            g.successors.entry(p).or_default();
            match kind {
                TileKind::Blocked | TileKind::WarpPoint => {}
                TileKind::Empty => g.link_from(grid, p),
                TileKind::Unknown | TileKind::EndOfMap => {
                    log::error!("interior tile {p} has unexpected kind {kind:?}");
                    panic!("interior tile {p} has unexpected kind {kind:?}");
                }
            }
        }
        log::trace!(
            "move graph: {} nodes, {} edges",
            g.successors.len(),
            g.edge_count()
        );
        g
    }

    fn link_from(&mut self, grid: &TileGrid, p: Point) {
        for n in p.neighbors_4() {
            match grid.kind_at(n) {
                TileKind::Empty => {
                    self.add_edge(p, n, STRAIGHT_COST);
                    self.add_edge(n, p, STRAIGHT_COST);
                }
                TileKind::WarpPoint => self.add_edge(p, n, STRAIGHT_COST),
                _ => {}
            }
        }
        for d in p.diagonals() {
            let c1 = Point::new(d.x, p.y);
            let c2 = Point::new(p.x, d.y);
            let open = [d, c1, c2]
                .iter()
                .all(|&q| grid.kind_at(q) == TileKind::Empty);
            if !open {
                continue;
            }
            self.add_edge(p, d, DIAGONAL_COST);
            self.add_edge(d, p, DIAGONAL_COST);
            self.add_edge(c1, c2, DIAGONAL_COST);
            self.add_edge(c2, c1, DIAGONAL_COST);
        }
    }

    /// Insert the edge `from → to`. Inserting an existing edge is a no-op.
    pub fn add_edge(&mut self, from: Point, to: Point, weight: i32) {
        if self.weights.contains_key(&(from, to)) {
            return;
        }
        self.weights.insert((from, to), weight);
        self.successors.entry(from).or_default().push(to);
    }

    /// Weight of the edge `from → to`, if present.
    pub fn weight(&self, from: Point, to: Point) -> Option<i32> {
        self.weights.get(&(from, to)).copied()
    }

    /// Outgoing neighbours of `p`, in insertion order. Empty for dead ends
    /// and unknown coordinates.
    pub fn successors(&self, p: Point) -> &[Point] {
        self.successors.get(&p).map(|s| s.as_slice()).unwrap_or_default()
    }

    /// Whether `p` is a key of the graph.
    pub fn contains(&self, p: Point) -> bool {
        self.successors.contains_key(&p)
    }

    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }
}

impl Pather for MoveGraph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend_from_slice(self.successors(p));
    }
}

impl WeightedPather for MoveGraph {
    fn cost(&self, from: Point, to: Point) -> i32 {
        self.weight(from, to).unwrap_or(i32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::{LocationSnapshot, places};
    use wayfarer_map::build_grid;

    fn graph(layout: &str) -> MoveGraph {
        let s = LocationSnapshot::parse(places::FARM, layout).unwrap();
        MoveGraph::build(&build_grid(&s))
    }

    #[test]
    fn open_block_is_fully_connected() {
        let g = graph("..\n..");
        assert_eq!(g.node_count(), 4);
        // 4 orthogonal pairs and 2 diagonal pairs, both directions.
        assert_eq!(g.edge_count(), 12);
        assert_eq!(g.weight(Point::new(0, 0), Point::new(1, 1)), Some(DIAGONAL_COST));
        assert_eq!(g.weight(Point::new(1, 0), Point::new(0, 1)), Some(DIAGONAL_COST));
        assert_eq!(g.weight(Point::new(0, 0), Point::new(1, 0)), Some(STRAIGHT_COST));
    }

    #[test]
    fn corners_block_diagonals() {
        let g = graph("..\n#.");
        assert_eq!(g.weight(Point::new(0, 0), Point::new(1, 1)), None);
        assert_eq!(g.weight(Point::new(1, 1), Point::new(0, 0)), None);
        assert_eq!(g.weight(Point::new(0, 0), Point::new(1, 0)), Some(STRAIGHT_COST));
    }

    #[test]
    fn blocked_tiles_are_dead_ends_but_targets() {
        let g = graph(".#");
        let wall = Point::new(1, 0);
        assert!(g.contains(wall));
        assert!(g.successors(wall).is_empty());
        assert_eq!(g.weight(Point::new(0, 0), wall), None);
    }

    #[test]
    fn warps_are_one_way_targets() {
        let mut s = LocationSnapshot::parse(places::FARM, "..\n..").unwrap();
        s.add_warp(Point::new(-1, 0), places::BUS_STOP, Point::new(5, 5));
        let g = MoveGraph::build(&build_grid(&s));
        let warp = Point::new(-1, 0);
        assert_eq!(g.weight(Point::new(0, 0), warp), Some(STRAIGHT_COST));
        assert_eq!(g.weight(warp, Point::new(0, 0)), None);
        assert_eq!(g.weight(Point::new(0, 1), warp), None);
        assert!(g.successors(warp).is_empty());
    }

    #[test]
    fn interior_warps_take_only_orthogonal_entries() {
        let mut s = LocationSnapshot::parse(places::FARM_HOUSE, "...\n...\n...").unwrap();
        let warp = Point::new(1, 1);
        s.add_warp(warp, places::FARM, Point::new(64, 15));
        let g = MoveGraph::build(&build_grid(&s));

        assert!(g.contains(warp));
        assert!(g.successors(warp).is_empty());
        for n in warp.neighbors_4() {
            assert_eq!(g.weight(n, warp), Some(STRAIGHT_COST), "{n} -> warp");
            assert_eq!(g.weight(warp, n), None);
        }
        for d in warp.diagonals() {
            assert_eq!(g.weight(d, warp), None, "{d} -> warp");
        }
        // The warp is a corner of every 2x2 block around it.
        assert_eq!(g.weight(Point::new(0, 1), Point::new(1, 0)), None);
        assert_eq!(g.weight(Point::new(0, 0), Point::new(1, 0)), Some(STRAIGHT_COST));
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = MoveGraph::default();
        let (a, b) = (Point::new(0, 0), Point::new(1, 0));
        g.add_edge(a, b, 100);
        g.add_edge(a, b, 100);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.successors(a), &[b]);
    }

    #[test]
    fn pather_reports_successors() {
        let g = graph("...");
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 0), &mut buf);
        buf.sort();
        assert_eq!(buf, vec![Point::new(0, 0), Point::new(2, 0)]);
        assert_eq!(g.cost(Point::new(1, 0), Point::new(2, 0)), STRAIGHT_COST);
    }
}
