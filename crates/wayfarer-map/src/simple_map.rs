//! Turning a host [`Location`] into a [`TileGrid`].

use std::cell::OnceCell;

use wayfarer_core::{Content, Location, Tile, TileKind};

use crate::grid::TileGrid;

/// Build the padded tile grid of `loc`.
///
/// The build runs in three passes over the grid:
///
/// 1. the padding ring becomes [`TileKind::EndOfMap`]; interior tiles are
///    [`TileKind::Blocked`] if the host reports collision or water, else
///    [`TileKind::Empty`];
/// 2. every warp inside the padded bounds is stamped as
///    [`TileKind::WarpPoint`];
/// 3. known features overlay their [`Content`] on interior `Empty` and
///    `Blocked` tiles.
///
/// # Panics
///
/// Panics if an interior coordinate computed from the grid falls outside the
/// location's native bounds.
pub fn build_grid<L: Location + ?Sized>(loc: &L) -> TileGrid {
    let mut grid = TileGrid::new(loc.size());
    let interior = grid.interior();

    for p in grid.bounds() {
        if grid.bounds().on_edge(p) {
            continue;
        }
        if !interior.contains(p) {
            log::error!("{}: interior tile {p} outside native bounds {interior}", loc.name());
            panic!("interior tile {p} outside native bounds {interior}");
        }
        let kind = if loc.is_blocked(p) || loc.is_water(p) {
            TileKind::Blocked
        } else {
            TileKind::Empty
        };
        grid.put(Tile::new(p, kind));
    }

    for warp in loc.warps() {
        if !grid.contains(warp.pos) {
            log::warn!(
                "{}: warp to {} at {} lies outside the map, skipped",
                loc.name(),
                warp.target,
                warp.pos
            );
            continue;
        }
        grid.put(Tile::new(warp.pos, TileKind::WarpPoint));
    }

    for feature in loc.features() {
        let Some(content) = Content::from_feature_name(&feature.name) else {
            continue;
        };
        if !interior.contains(feature.pos) {
            continue;
        }
        if let Some(&tile) = grid.at(feature.pos) {
            if matches!(tile.kind, TileKind::Empty | TileKind::Blocked) {
                grid.put(tile.with_content(content));
            }
        }
    }

    log::trace!(
        "{}: built {} grid, {} blocked, {} warps",
        loc.name(),
        grid.bounds(),
        grid.count_kind(TileKind::Blocked),
        grid.count_kind(TileKind::WarpPoint)
    );
    grid
}

/// A location paired with its lazily built tile grid.
///
/// The grid is computed on first access and kept until [`SimpleMap::rebuild`]
/// is called, so a map should live no longer than one navigation request
/// unless the caller rebuilds it after the host world changes.
#[derive(Debug)]
pub struct SimpleMap<'a, L: Location + ?Sized> {
    location: &'a L,
    tiles: OnceCell<TileGrid>,
}

impl<'a, L: Location + ?Sized> SimpleMap<'a, L> {
    pub fn new(location: &'a L) -> Self {
        Self {
            location,
            tiles: OnceCell::new(),
        }
    }

    /// The underlying location.
    pub fn location(&self) -> &'a L {
        self.location
    }

    /// The tile grid, built on first call.
    pub fn tiles(&self) -> &TileGrid {
        self.tiles.get_or_init(|| build_grid(self.location))
    }

    /// Discard the cached grid and build it again.
    pub fn rebuild(&mut self) -> &TileGrid {
        self.tiles = OnceCell::new();
        self.tiles()
    }

    /// Whether the grid has been built.
    pub fn is_built(&self) -> bool {
        self.tiles.get().is_some()
    }
}
