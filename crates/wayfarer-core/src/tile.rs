//! The [`Tile`] value type and its classifications.

use std::fmt;

use crate::geom::Point;

/// Passability class of a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    /// Not classified yet. Never survives a finished grid build.
    #[default]
    Unknown,
    /// Open ground the avatar can stand on.
    Empty,
    /// Collision or water.
    Blocked,
    /// Exit tile that teleports the avatar to another location.
    WarpPoint,
    /// Synthetic padding outside the native map.
    EndOfMap,
}

impl TileKind {
    /// Whether the avatar can stand on a tile of this kind.
    #[inline]
    pub fn is_walkable(self) -> bool {
        self == TileKind::Empty
    }
}

/// Harvestable object lying on a tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Content {
    Unknown,
    #[default]
    Empty,
    Tree,
    Twig,
    Stone,
    Weeds,
    SeedSpot,
}

impl Content {
    /// Contents cleared when tidying up a field.
    pub const DEBRIS: [Content; 4] = [Content::Tree, Content::Twig, Content::Stone, Content::Weeds];

    /// Map a host feature name to content, if it is one we track.
    pub fn from_feature_name(name: &str) -> Option<Content> {
        match name.trim() {
            "Tree" => Some(Content::Tree),
            "Twig" => Some(Content::Twig),
            "Stone" => Some(Content::Stone),
            "Weeds" => Some(Content::Weeds),
            "Seed Spot" | "Artifact Spot" => Some(Content::SeedSpot),
            _ => None,
        }
    }

    /// The host feature name this content is read from.
    pub fn feature_name(self) -> Option<&'static str> {
        match self {
            Content::Tree => Some("Tree"),
            Content::Twig => Some("Twig"),
            Content::Stone => Some("Stone"),
            Content::Weeds => Some("Weeds"),
            Content::SeedSpot => Some("Seed Spot"),
            Content::Unknown | Content::Empty => None,
        }
    }

    /// Whether this content is one of [`Content::DEBRIS`].
    #[inline]
    pub fn is_debris(self) -> bool {
        Self::DEBRIS.contains(&self)
    }
}

/// One cell of a navigation grid.
///
/// Tiles are plain values: equality covers coordinate, kind and content.
/// Lookup tables keyed by location should use [`Tile::key`] instead, so a
/// tile whose content differs still lands on the same slot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub pos: Point,
    pub kind: TileKind,
    pub content: Content,
}

impl Tile {
    /// A tile with the given kind and no content.
    #[inline]
    pub const fn new(pos: Point, kind: TileKind) -> Self {
        Self {
            pos,
            kind,
            content: Content::Empty,
        }
    }

    /// Same tile carrying `content`.
    #[inline]
    pub const fn with_content(self, content: Content) -> Self {
        Self { content, ..self }
    }

    /// Same tile reclassified as `kind`.
    #[inline]
    pub const fn with_kind(self, kind: TileKind) -> Self {
        Self { kind, ..self }
    }

    /// Stable lookup key: the world coordinate.
    #[inline]
    pub const fn key(&self) -> Point {
        self.pos
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.pos.y
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.pos, self.kind)?;
        if self.content != Content::Empty {
            write!(f, " [{:?}]", self.content)?;
        }
        Ok(())
    }
}
