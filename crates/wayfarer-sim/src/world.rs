use std::collections::HashMap;

use wayfarer_core::{Content, Location, LocationSnapshot, Point, Position, Range};
use wayfarer_walk::{InputState, MoveFlags};

/// Tiles the avatar moves per tick along each held axis.
pub const DEFAULT_SPEED: f32 = 0.25;

/// What happened to the avatar during one [`SimWorld::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepEvent {
    /// No key held.
    Still,
    Moved,
    /// Every attempted move hit collision.
    Bumped,
    /// The avatar stepped on an exit and now stands in `location`.
    Warped { location: String, arrival: Point },
}

/// An in-memory host: a set of locations and one avatar walking between
/// them under simulated input.
#[derive(Debug, Clone)]
pub struct SimWorld {
    current: LocationSnapshot,
    elsewhere: HashMap<String, LocationSnapshot>,
    avatar: Position,
    speed: f32,
}

impl SimWorld {
    /// A world whose avatar starts on `tile` of `start`.
    pub fn new(start: LocationSnapshot, tile: Point) -> Self {
        Self {
            current: start,
            elsewhere: HashMap::new(),
            avatar: Position::from(tile),
            speed: DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Make `loc` reachable through warps targeting its name.
    pub fn add_location(&mut self, loc: LocationSnapshot) {
        self.elsewhere.insert(loc.name().to_owned(), loc);
    }

    /// The location the avatar is in.
    pub fn location(&self) -> &LocationSnapshot {
        &self.current
    }

    pub fn location_mut(&mut self) -> &mut LocationSnapshot {
        &mut self.current
    }

    pub fn avatar(&self) -> Position {
        self.avatar
    }

    pub fn avatar_tile(&self) -> Point {
        self.avatar.tile()
    }

    /// Move the avatar for one tick according to the held keys.
    ///
    /// The destination is tested on its rounded tile: an exit teleports the
    /// avatar, collision, water and the map edge stop it. A blocked diagonal
    /// move is retried along each axis alone.
    pub fn step(&mut self, input: &InputState) -> StepEvent {
        let held = input.held;
        let dx = axis(held, MoveFlags::RIGHT, MoveFlags::LEFT);
        let dy = axis(held, MoveFlags::DOWN, MoveFlags::UP);
        if dx == 0 && dy == 0 {
            return StepEvent::Still;
        }

        let tries = [(dx, dy), (dx, 0), (0, dy)];
        for (tx, ty) in tries {
            if tx == 0 && ty == 0 {
                continue;
            }
            let to = Position::new(
                self.avatar.x + tx as f32 * self.speed,
                self.avatar.y + ty as f32 * self.speed,
            );
            let tile = to.tile();
            if let Some(event) = self.enter_warp(tile) {
                return event;
            }
            if self.is_open(tile) {
                self.avatar = to;
                return StepEvent::Moved;
            }
        }
        log::trace!("avatar bumped at {}", self.avatar);
        StepEvent::Bumped
    }

    fn is_open(&self, tile: Point) -> bool {
        let loc = &self.current;
        Range::with_size(loc.size()).contains(tile) && !loc.is_blocked(tile) && !loc.is_water(tile)
    }

    fn enter_warp(&mut self, tile: Point) -> Option<StepEvent> {
        let warp = self.current.warps().iter().find(|w| w.pos == tile)?.clone();
        let Some(next) = self.elsewhere.remove(&warp.target) else {
            log::warn!("warp at {tile} leads to unknown location {}", warp.target);
            return None;
        };
        log::info!(
            "avatar warped from {} to {} at {}",
            self.current.name(),
            warp.target,
            warp.arrival
        );
        let prev = std::mem::replace(&mut self.current, next);
        self.elsewhere.insert(prev.name().to_owned(), prev);
        self.avatar = Position::from(warp.arrival);
        Some(StepEvent::Warped {
            location: warp.target,
            arrival: warp.arrival,
        })
    }

    /// Clear the first debris of the given kinds orthogonally next to the
    /// avatar. Returns what was cleared.
    pub fn harvest_adjacent(&mut self, kinds: &[Content]) -> Option<Content> {
        let at = self.avatar_tile();
        for n in at.neighbors_4() {
            let found = self
                .current
                .features()
                .iter()
                .filter(|f| f.pos == n)
                .find_map(|f| Content::from_feature_name(&f.name))
                .filter(|c| kinds.contains(c));
            if let Some(content) = found {
                self.current.clear_features_at(n);
                log::debug!("cleared {content:?} at {n}");
                return Some(content);
            }
        }
        None
    }
}

fn axis(held: MoveFlags, plus: MoveFlags, minus: MoveFlags) -> i32 {
    i32::from(held.contains(plus)) - i32::from(held.contains(minus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::places;

    fn keys(held: MoveFlags) -> InputState {
        InputState {
            held,
            ..InputState::default()
        }
    }

    fn world() -> SimWorld {
        let mut farm = LocationSnapshot::parse(places::FARM, "...\n.#.\n...").unwrap();
        farm.add_warp(Point::new(-1, 0), places::BUS_STOP, Point::new(9, 1));
        let mut bus = LocationSnapshot::new(places::BUS_STOP, 10, 3);
        bus.add_warp(Point::new(10, 1), places::FARM, Point::new(0, 0));
        let mut w = SimWorld::new(farm, Point::new(0, 0));
        w.add_location(bus);
        w
    }

    #[test]
    fn moves_a_quarter_tile_per_tick() {
        let mut w = world();
        assert_eq!(w.step(&keys(MoveFlags::RIGHT)), StepEvent::Moved);
        assert_eq!(w.avatar(), Position::new(0.25, 0.0));
        assert_eq!(w.step(&keys(MoveFlags::RIGHT)), StepEvent::Moved);
        assert_eq!(w.avatar_tile(), Point::new(1, 0));
        assert_eq!(w.step(&keys(MoveFlags::empty())), StepEvent::Still);
        assert_eq!(w.step(&keys(MoveFlags::LEFT | MoveFlags::RIGHT)), StepEvent::Still);
    }

    #[test]
    fn collision_stops_the_avatar() {
        let mut w = world();
        w.step(&keys(MoveFlags::RIGHT));
        w.step(&keys(MoveFlags::RIGHT));
        w.step(&keys(MoveFlags::RIGHT));
        w.step(&keys(MoveFlags::RIGHT));
        assert_eq!(w.avatar(), Position::new(1.0, 0.0));
        w.step(&keys(MoveFlags::DOWN));
        assert_eq!(w.step(&keys(MoveFlags::DOWN)), StepEvent::Bumped);
        assert_eq!(w.avatar(), Position::new(1.0, 0.25));
    }

    #[test]
    fn map_edge_without_warp_is_solid() {
        let mut w = world();
        w.step(&keys(MoveFlags::UP));
        assert_eq!(w.step(&keys(MoveFlags::UP)), StepEvent::Bumped);
    }

    #[test]
    fn exits_teleport_and_swap_locations() {
        let mut w = world();
        w.step(&keys(MoveFlags::LEFT));
        let event = w.step(&keys(MoveFlags::LEFT));
        assert_eq!(
            event,
            StepEvent::Warped {
                location: places::BUS_STOP.to_owned(),
                arrival: Point::new(9, 1)
            }
        );
        assert_eq!(w.location().name(), places::BUS_STOP);
        assert_eq!(w.avatar(), Position::new(9.0, 1.0));

        w.step(&keys(MoveFlags::RIGHT));
        w.step(&keys(MoveFlags::RIGHT));
        assert_eq!(w.location().name(), places::FARM);
        assert_eq!(w.avatar_tile(), Point::new(0, 0));
    }

    #[test]
    fn harvesting_reopens_the_tile() {
        let farm = LocationSnapshot::parse(places::FARM, ".s\n.x").unwrap();
        let mut w = SimWorld::new(farm, Point::new(0, 0));
        assert_eq!(w.harvest_adjacent(&Content::DEBRIS), Some(Content::Stone));
        assert!(!w.location().is_blocked(Point::new(1, 0)));
        assert_eq!(w.harvest_adjacent(&Content::DEBRIS), None);
    }
}
