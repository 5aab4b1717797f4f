//! Queries a host answers about one location of the game world.

use crate::geom::Point;

/// Names of the locations the farm bot knows its way between.
pub mod places {
    pub const FARM: &str = "Farm";
    pub const FARM_HOUSE: &str = "FarmHouse";
    pub const BUS_STOP: &str = "BusStop";
    pub const TOWN: &str = "Town";
    pub const MOUNTAIN: &str = "Mountain";
    pub const BACKWOODS: &str = "Backwoods";
    pub const FOREST: &str = "Forest";
}

/// An exit tile leading to another location.
///
/// `pos` is frequently just outside the native map, e.g. `(12, -1)` for an
/// exit off the top edge.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Warp {
    pub pos: Point,
    pub target: String,
    /// Where the avatar appears in `target`.
    pub arrival: Point,
}

impl Warp {
    pub fn new(pos: Point, target: impl Into<String>, arrival: Point) -> Self {
        Self {
            pos,
            target: target.into(),
            arrival,
        }
    }
}

/// A placed object or terrain feature, identified by its host name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    pub pos: Point,
    pub name: String,
}

impl Feature {
    pub fn new(pos: Point, name: impl Into<String>) -> Self {
        Self {
            pos,
            name: name.into(),
        }
    }
}

/// Read-only view of a host location.
///
/// Everything navigation needs is asked through this trait, so a grid can be
/// built from a live game, a recorded snapshot, or a test fixture alike.
pub trait Location {
    /// Location name, e.g. [`places::FARM`].
    fn name(&self) -> &str;

    /// Native map size in tiles (width, height).
    fn size(&self) -> Point;

    /// Whether collision blocks the tile at `p`.
    fn is_blocked(&self, p: Point) -> bool;

    /// Whether the tile at `p` is water.
    fn is_water(&self, p: Point) -> bool;

    /// Every exit of this location.
    fn warps(&self) -> &[Warp];

    /// Placed objects and terrain features.
    fn features(&self) -> &[Feature];

    /// Exits leading to `target`, in host order.
    fn warps_to(&self, target: &str) -> Vec<&Warp> {
        self.warps().iter().filter(|w| w.target == target).collect()
    }

    /// Distinct exit targets, in first-seen order.
    fn warp_targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = Vec::new();
        for w in self.warps() {
            if !targets.contains(&w.target.as_str()) {
                targets.push(&w.target);
            }
        }
        targets
    }
}
