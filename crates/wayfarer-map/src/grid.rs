//! A padded grid of [`Tile`] values addressed by world coordinates.
//!
//! A location of native size `W × H` is stored as `(W+2) × (H+2)` tiles: the
//! extra ring holds exits that the host reports at coordinates such as
//! `(-1, 7)` or `(W, 3)`. Grid index `i` on either axis is world coordinate
//! `i - 1`; [`grid_index`] and [`world_at`] convert between the two.

use wayfarer_core::{Content, Point, Range, Tile, TileKind};

/// Convert a world coordinate to its padded grid index.
///
/// Returns `None` for coordinates left of or above the padding ring.
#[inline]
pub fn grid_index(p: Point) -> Option<(usize, usize)> {
    let i = usize::try_from(p.x + 1).ok()?;
    let j = usize::try_from(p.y + 1).ok()?;
    Some((i, j))
}

/// Convert a padded grid index back to the world coordinate it stands for.
///
/// Index 0 is a valid input and maps to world coordinate -1.
#[inline]
pub fn world_at(i: usize, j: usize) -> Point {
    Point::new(i as i32 - 1, j as i32 - 1)
}

/// Reasons a stored grid does not describe a padded location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("bounds {bounds} do not pad a native size of {native}")]
    BadBounds { native: Point, bounds: Range },
    #[error("expected {expected} tiles, found {found}")]
    TileCount { expected: usize, found: usize },
    #[error("tile {index} is at {found}, expected {expected}")]
    Misplaced {
        index: usize,
        expected: Point,
        found: Point,
    },
}

/// A padded tile matrix for one location.
///
/// Built by [`crate::build_grid`]; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTileGrid"))]
pub struct TileGrid {
    native: Point,
    bounds: Range,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileGrid {
    native: Point,
    bounds: Range,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileGrid> for TileGrid {
    type Error = GridError;

    fn try_from(raw: RawTileGrid) -> Result<Self, GridError> {
        Self::from_parts(raw.native, raw.bounds, raw.tiles)
    }
}

impl TileGrid {
    /// A grid for a location of native size `native`, with the padding ring
    /// set to [`TileKind::EndOfMap`] and every interior tile
    /// [`TileKind::Unknown`].
    pub(crate) fn new(native: Point) -> Self {
        let native = Point::new(native.x.max(0), native.y.max(0));
        let bounds = Range::new(-1, -1, native.x + 1, native.y + 1);
        let tiles = bounds
            .iter()
            .map(|p| {
                if bounds.on_edge(p) {
                    Tile::new(p, TileKind::EndOfMap)
                } else {
                    Tile::new(p, TileKind::Unknown)
                }
            })
            .collect();
        Self {
            native,
            bounds,
            tiles,
        }
    }

    /// Reassemble a grid from stored parts, checking that `tiles` covers
    /// `bounds` in row-major order and that `bounds` pads `native` by one.
    pub fn from_parts(native: Point, bounds: Range, tiles: Vec<Tile>) -> Result<Self, GridError> {
        let expected = Range::new(-1, -1, native.x + 1, native.y + 1);
        if native.x < 0 || native.y < 0 || bounds != expected {
            return Err(GridError::BadBounds { native, bounds });
        }
        if tiles.len() != bounds.len() {
            return Err(GridError::TileCount {
                expected: bounds.len(),
                found: tiles.len(),
            });
        }
        for (index, (tile, p)) in tiles.iter().zip(bounds.iter()).enumerate() {
            if tile.pos != p {
                return Err(GridError::Misplaced {
                    index,
                    expected: p,
                    found: tile.pos,
                });
            }
        }
        Ok(Self {
            native,
            bounds,
            tiles,
        })
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let x = (p.x - self.bounds.min.x) as usize;
        let y = (p.y - self.bounds.min.y) as usize;
        Some(y * self.bounds.width() as usize + x)
    }

    /// Replace the tile at its own coordinate. Out-of-bounds tiles are
    /// ignored.
    pub(crate) fn put(&mut self, tile: Tile) {
        if let Some(i) = self.idx(tile.pos) {
            self.tiles[i] = tile;
        }
    }

    /// Native map size (without padding).
    pub fn native_size(&self) -> Point {
        self.native
    }

    /// Padded world-coordinate bounds, `[-1, W+1) × [-1, H+1)`.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Native map bounds, `[0, W) × [0, H)`.
    pub fn interior(&self) -> Range {
        Range::with_size(self.native)
    }

    /// Whether `p` falls inside the padded bounds.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The tile at world coordinate `p`.
    pub fn at(&self, p: Point) -> Option<&Tile> {
        self.idx(p).map(|i| &self.tiles[i])
    }

    /// The tile at padded grid index `(i, j)`.
    pub fn at_index(&self, i: usize, j: usize) -> Option<&Tile> {
        self.at(world_at(i, j))
    }

    /// Kind of the tile at `p`; [`TileKind::EndOfMap`] outside the grid.
    pub fn kind_at(&self, p: Point) -> TileKind {
        self.at(p).map_or(TileKind::EndOfMap, |t| t.kind)
    }

    /// Content of the tile at `p`; [`Content::Empty`] outside the grid.
    pub fn content_at(&self, p: Point) -> Content {
        self.at(p).map_or(Content::Empty, |t| t.content)
    }

    /// Every tile in row-major order, ring included.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles of the given kind.
    pub fn count_kind(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    /// Tiles carrying any of `contents`, in row-major order.
    pub fn tiles_with<'a>(&'a self, contents: &'a [Content]) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles.iter().filter(|t| contents.contains(&t.content))
    }
}
