//! Padded tile grids built from host locations.
//!
//! [`build_grid`] classifies every tile of a [`wayfarer_core::Location`]
//! plus a one-tile ring around it, where the host places most exits.
//! [`SimpleMap`] wraps a location and caches its grid.

mod grid;
mod simple_map;

pub use grid::{GridError, TileGrid, grid_index, world_at};
pub use simple_map::{SimpleMap, build_grid};
