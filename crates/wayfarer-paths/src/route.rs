use wayfarer_core::{Point, Tile};

/// An ordered tile route from origin to destination, both inclusive.
///
/// An empty route means the destination could not be reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    tiles: Vec<Tile>,
    cost: i32,
}

impl Route {
    pub fn new(tiles: Vec<Tile>, cost: i32) -> Self {
        Self { tiles, cost }
    }

    /// The "unreachable" route.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles, origin included.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Total edge weight, in hundredths of a tile.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    pub fn origin(&self) -> Option<&Tile> {
        self.tiles.first()
    }

    pub fn destination(&self) -> Option<&Tile> {
        self.tiles.last()
    }

    /// Tile coordinates in route order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.tiles.iter().map(Tile::key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

impl IntoIterator for Route {
    type Item = Tile;
    type IntoIter = std::vec::IntoIter<Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
