//! Shared types for tile navigation.
//!
//! This crate provides the foundational types used across the *wayfarer*
//! workspace: geometry primitives, the [`Tile`] value type, the [`Location`]
//! trait a host implements to describe one map of its world, and an
//! in-memory [`LocationSnapshot`].

pub mod geom;
pub mod location;
pub mod snapshot;
pub mod tile;

pub use geom::{Point, Position, Range};
pub use location::{Feature, Location, Warp, places};
pub use snapshot::{LocationSnapshot, SnapshotError};
pub use tile::{Content, Tile, TileKind};
