//! An in-memory [`Location`] built in code or parsed from ASCII art.
//!
//! ```text
//! . open ground     # collision     ~ water
//! T tree            t twig          s stone
//! w weeds           x seed spot
//! ```
//!
//! Debris glyphs (`T t s w`) block movement and carry a feature of the same
//! name; `x` carries a seed spot but stays walkable. Warps are added with
//! [`LocationSnapshot::add_warp`] since they usually sit outside the map.

use crate::geom::{Point, Range};
use crate::location::{Feature, Location, Warp};

/// Glyphs accepted by [`LocationSnapshot::parse`].
pub const GLYPHS: &str = ".#~Ttswx";

/// Errors that can occur when parsing a snapshot layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    /// The layout has no rows.
    #[error("snapshot layout is empty")]
    Empty,
    /// Rows have different widths.
    #[error("snapshot row {row} is {found} tiles wide, expected {expected}")]
    InconsistentSize {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A glyph outside [`GLYPHS`] was found.
    #[error("snapshot contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },
}

/// Frozen copy of a location's navigation-relevant state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSnapshot {
    name: String,
    size: Point,
    blocked: Vec<bool>,
    water: Vec<bool>,
    warps: Vec<Warp>,
    features: Vec<Feature>,
}

impl LocationSnapshot {
    /// An all-open location of the given size.
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Self {
        let len = Range::new(0, 0, width, height).len();
        Self {
            name: name.into(),
            size: Point::new(width.max(0), height.max(0)),
            blocked: vec![false; len],
            water: vec![false; len],
            warps: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Parse an ASCII layout, one row per line.
    ///
    /// Blank lines around the layout and whitespace around each row are
    /// ignored, so layouts can be indented inside string literals.
    pub fn parse(name: impl Into<String>, layout: &str) -> Result<Self, SnapshotError> {
        let rows: Vec<&str> = layout
            .trim()
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(SnapshotError::Empty);
        };
        let width = first.chars().count() as i32;
        let height = rows.len() as i32;

        let mut snap = Self::new(name, width, height);
        for (y, row) in rows.iter().enumerate() {
            let y = y as i32;
            let found = row.chars().count() as i32;
            if found != width {
                return Err(SnapshotError::InconsistentSize {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y);
                snap.apply_glyph(p, ch)?;
            }
        }
        Ok(snap)
    }

    fn apply_glyph(&mut self, p: Point, ch: char) -> Result<(), SnapshotError> {
        match ch {
            '.' => {}
            '#' => self.set_blocked(p, true),
            '~' => self.set_water(p, true),
            'T' | 't' | 's' | 'w' => {
                let name = match ch {
                    'T' => "Tree",
                    't' => "Twig",
                    's' => "Stone",
                    _ => "Weeds",
                };
                self.set_blocked(p, true);
                self.add_feature(p, name);
            }
            'x' => {
                self.add_feature(p, "Seed Spot");
            }
            _ => return Err(SnapshotError::InvalidGlyph { ch, pos: p }),
        }
        Ok(())
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !Range::with_size(self.size).contains(p) {
            return None;
        }
        Some((p.y * self.size.x + p.x) as usize)
    }

    /// Mark collision at `p`. Out-of-map points are ignored.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if let Some(i) = self.idx(p) {
            self.blocked[i] = blocked;
        }
    }

    /// Mark water at `p`. Out-of-map points are ignored.
    pub fn set_water(&mut self, p: Point, water: bool) {
        if let Some(i) = self.idx(p) {
            self.water[i] = water;
        }
    }

    /// Add an exit at `pos` leading to `arrival` in `target`.
    pub fn add_warp(&mut self, pos: Point, target: impl Into<String>, arrival: Point) -> &mut Self {
        self.warps.push(Warp::new(pos, target, arrival));
        self
    }

    /// Add a named feature at `pos`.
    pub fn add_feature(&mut self, pos: Point, name: impl Into<String>) -> &mut Self {
        self.features.push(Feature::new(pos, name));
        self
    }

    /// Remove every feature at `pos` and clear its collision.
    ///
    /// Returns whether anything was removed.
    pub fn clear_features_at(&mut self, pos: Point) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f.pos != pos);
        let removed = self.features.len() != before;
        if removed {
            self.set_blocked(pos, false);
        }
        removed
    }
}

impl Location for LocationSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> Point {
        self.size
    }

    fn is_blocked(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.blocked[i])
    }

    fn is_water(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.water[i])
    }

    fn warps(&self) -> &[Warp] {
        &self.warps
    }

    fn features(&self) -> &[Feature] {
        &self.features
    }
}
