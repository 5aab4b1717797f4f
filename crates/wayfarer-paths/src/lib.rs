//! Movement graphs and shortest-route search over tile grids.
//!
//! A [`MoveGraph`] is derived from a [`wayfarer_map::TileGrid`] and encodes
//! which single steps the avatar may take and what they cost (see
//! [`STRAIGHT_COST`] and [`DIAGONAL_COST`]). Routes are found with
//! Dijkstra's algorithm; among frontier entries of equal cost the one pushed
//! first is expanded first, so results are deterministic.
//!
//! - [`find_path`]: cheapest route to a fixed destination.
//! - [`find_path_to_nearest_content`]: cheapest route to a walkable tile
//!   orthogonally adjacent to one of the requested [`Content`] kinds.
//!
//! Both build a fresh graph; use [`PathFinder`] to run several queries
//! against one grid.

mod dijkstra;
mod distance;
mod frontier;
mod graph;
mod route;
mod traits;

use wayfarer_core::{Content, Point, TileKind};
use wayfarer_map::TileGrid;

pub use distance::chebyshev;
pub use graph::{DIAGONAL_COST, MoveGraph, STRAIGHT_COST};
pub use route::Route;
pub use traits::{Pather, WeightedPather};

/// Route queries over one grid and its movement graph.
pub struct PathFinder<'g> {
    grid: &'g TileGrid,
    graph: MoveGraph,
}

impl<'g> PathFinder<'g> {
    pub fn new(grid: &'g TileGrid) -> Self {
        Self {
            grid,
            graph: MoveGraph::build(grid),
        }
    }

    pub fn grid(&self) -> &'g TileGrid {
        self.grid
    }

    pub fn graph(&self) -> &MoveGraph {
        &self.graph
    }

    /// Cheapest route from `origin` to `destination`.
    ///
    /// Returns `[origin]` when both are equal and an empty route when the
    /// destination is unreachable or either end lies outside the grid.
    pub fn find_path(&self, origin: Point, destination: Point) -> Route {
        if !self.grid.contains(origin) || !self.grid.contains(destination) {
            log::warn!("route {origin} -> {destination} leaves the grid {}", self.grid.bounds());
            return Route::empty();
        }
        self.search(origin, |p| p == destination)
    }

    /// Cheapest route from `origin` to the nearest walkable tile with an
    /// orthogonal neighbour whose content is one of `kinds`.
    ///
    /// The origin itself qualifies, giving a one-tile route. Warp tiles never
    /// qualify, even when they border matching content.
    pub fn find_path_to_nearest_content(&self, origin: Point, kinds: &[Content]) -> Route {
        if !self.grid.contains(origin) {
            log::warn!("origin {origin} lies outside the grid {}", self.grid.bounds());
            return Route::empty();
        }
        let grid = self.grid;
        self.search(origin, |p| {
            grid.kind_at(p) == TileKind::Empty
                && p
                    .neighbors_4()
                    .iter()
                    .any(|&n| kinds.contains(&grid.content_at(n)))
        })
    }

    fn search(&self, origin: Point, is_goal: impl FnMut(Point) -> bool) -> Route {
        let Some(found) = dijkstra::shortest_path(&self.graph, origin, is_goal) else {
            return Route::empty();
        };
        let mut tiles = Vec::with_capacity(found.points.len());
        for p in found.points {
            match self.grid.at(p) {
                Some(&t) => tiles.push(t),
                None => {
                    log::error!("route point {p} outside the grid");
                    panic!("route point {p} outside the grid");
                }
            }
        }
        Route::new(tiles, found.cost)
    }
}

/// Cheapest route from `origin` to `destination` over a fresh graph.
pub fn find_path(grid: &TileGrid, origin: Point, destination: Point) -> Route {
    PathFinder::new(grid).find_path(origin, destination)
}

/// Cheapest route to the nearest tile next to any of `kinds`, over a fresh
/// graph.
pub fn find_path_to_nearest_content(grid: &TileGrid, origin: Point, kinds: &[Content]) -> Route {
    PathFinder::new(grid).find_path_to_nearest_content(origin, kinds)
}
