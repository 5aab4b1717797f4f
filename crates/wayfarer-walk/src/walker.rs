use std::collections::VecDeque;

use wayfarer_core::{Point, Position, Tile};
use wayfarer_paths::{Route, chebyshev};

use crate::config::WalkConfig;
use crate::direction::Direction;
use crate::input::{InputSimulator, WalkerId};

/// Whether a walker is driving input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WalkState {
    #[default]
    Idle,
    Walking,
}

/// Result of [`PathWalker::initiate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStart {
    Started,
    /// Nothing to walk; the walker stays idle.
    EmptyRoute,
    /// The route was planned from another tile than the avatar stands on.
    OriginMismatch { origin: Point, avatar: Point },
}

/// Result of one [`PathWalker::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No walk in progress.
    Idle,
    Walking,
    /// The last waypoint was reached; input has been cleared.
    Arrived,
    /// The avatar is too far from the next waypoint; input has been cleared.
    OffCourse { expected: Point, actual: Point },
}

/// Turns a [`Route`] into held directional keys, one tick at a time.
///
/// The walker keeps the next waypoint it expects the avatar to reach. Each
/// tick the avatar's position is rounded to a tile:
///
/// - on the expected waypoint, the following one is dequeued and the keys
///   for the step towards it are held (only rewritten when the direction
///   changes); with no waypoint left the walk ends;
/// - farther than [`WalkConfig::off_course_radius`] from it, the walk is
///   aborted, e.g. after the avatar went through a warp;
/// - otherwise the avatar is still between tiles and nothing changes.
///
/// The walker does not own the [`InputSimulator`] it drives, so dropping it
/// mid-walk leaves its claim and held keys in place. Call
/// [`PathWalker::stop`] before dropping an active walker.
#[derive(Debug)]
pub struct PathWalker {
    id: WalkerId,
    config: WalkConfig,
    waypoints: VecDeque<Tile>,
    next: Option<Tile>,
    direction: Option<Direction>,
    state: WalkState,
}

impl PathWalker {
    /// A walker that will drive `input`.
    pub fn new(input: &mut InputSimulator, config: WalkConfig) -> Self {
        Self {
            id: input.register(),
            config,
            waypoints: VecDeque::new(),
            next: None,
            direction: None,
            state: WalkState::Idle,
        }
    }

    pub fn id(&self) -> WalkerId {
        self.id
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == WalkState::Walking
    }

    /// The waypoint the avatar is heading for.
    pub fn next_waypoint(&self) -> Option<&Tile> {
        self.next.as_ref()
    }

    /// The last commanded direction.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Waypoints left after [`PathWalker::next_waypoint`].
    pub fn remaining(&self) -> usize {
        self.waypoints.len()
    }

    /// Start walking `route` from the avatar's current position.
    ///
    /// A walk already in progress on this walker is stopped first.
    ///
    /// # Panics
    ///
    /// Panics if another walker is driving `input`.
    pub fn initiate(&mut self, input: &mut InputSimulator, route: &Route, avatar: Position) -> WalkStart {
        if self.is_active() {
            log::debug!("{}: replacing the current walk", self.id);
            self.stop(input);
        }
        let Some(&origin) = route.origin() else {
            log::warn!("{}: empty route, not moving", self.id);
            return WalkStart::EmptyRoute;
        };
        let at = avatar.tile();
        if origin.pos != at {
            log::warn!(
                "{}: avatar at {at} does not match route origin {}, not moving",
                self.id,
                origin.pos
            );
            return WalkStart::OriginMismatch {
                origin: origin.pos,
                avatar: at,
            };
        }

        input.claim(self.id);
        self.waypoints = route.iter().skip(1).copied().collect();
        self.next = Some(origin);
        self.direction = None;
        self.state = WalkState::Walking;
        log::info!(
            "{}: walking {} tiles from {} to {}",
            self.id,
            route.len(),
            origin.pos,
            route.destination().map_or(origin.pos, |t| t.pos)
        );
        WalkStart::Started
    }

    /// Advance the walk for one tick with the avatar at `avatar`.
    pub fn tick(&mut self, input: &mut InputSimulator, avatar: Position) -> TickOutcome {
        let Some(next) = self.next.filter(|_| self.is_active()) else {
            return TickOutcome::Idle;
        };
        let at = avatar.tile();

        if chebyshev(at, next.pos) > self.config.off_course_radius {
            log::warn!(
                "{}: avatar at {at} strayed from waypoint {}, stopping",
                self.id,
                next.pos
            );
            self.finish(input);
            return TickOutcome::OffCourse {
                expected: next.pos,
                actual: at,
            };
        }
        if at != next.pos {
            return TickOutcome::Walking;
        }

        let Some(following) = self.waypoints.pop_front() else {
            log::info!("{}: arrived at {at}", self.id);
            self.finish(input);
            return TickOutcome::Arrived;
        };
        self.next = Some(following);
        log::debug!("{}: next waypoint {}", self.id, following.pos);

        let dir = Direction::between(at, following.pos);
        if dir != self.direction {
            match dir {
                Some(d) => input.hold(d.flags()),
                None => {
                    log::warn!("{}: waypoint {} is not adjacent to {at}", self.id, following.pos);
                    input.clear();
                }
            }
            self.direction = dir;
            log::debug!("{}: heading {:?}", self.id, dir);
        }
        TickOutcome::Walking
    }

    /// [`PathWalker::tick`], reporting only whether the walk goes on.
    pub fn on_tick(&mut self, input: &mut InputSimulator, avatar: Position) -> bool {
        self.tick(input, avatar) == TickOutcome::Walking
    }

    /// Abort the walk, releasing every key and the input claim.
    pub fn stop(&mut self, input: &mut InputSimulator) {
        if self.is_active() {
            log::info!("{}: stopped", self.id);
            self.finish(input);
        }
    }

    fn finish(&mut self, input: &mut InputSimulator) {
        self.waypoints.clear();
        self.next = None;
        self.direction = None;
        self.state = WalkState::Idle;
        input.clear();
        input.release(self.id);
    }
}
