use std::time::Instant;

use wayfarer_core::{Location, Point, Position};
use wayfarer_map::SimpleMap;
use wayfarer_paths::{PathFinder, Route};

use crate::config::NavConfig;
use crate::error::NavError;
use crate::input::{InputSimulator, InputState};
use crate::walker::{PathWalker, TickOutcome, WalkStart};

/// Request-level navigation for one avatar.
///
/// Every request rebuilds the grid and movement graph of the location it is
/// given, plans a route from the avatar's tile and starts walking it. The
/// host then calls [`Navigator::tick`] once per game tick and feeds
/// [`Navigator::poll_input`] into its control layer.
#[derive(Debug)]
pub struct Navigator {
    config: NavConfig,
    input: InputSimulator,
    walker: PathWalker,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(NavConfig::default())
    }
}

impl Navigator {
    pub fn new(config: NavConfig) -> Self {
        let mut input = InputSimulator::new();
        let walker = PathWalker::new(&mut input, config.walk.clone());
        Self {
            config,
            input,
            walker,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn walker(&self) -> &PathWalker {
        &self.walker
    }

    pub fn is_walking(&self) -> bool {
        self.walker.is_active()
    }

    /// Walk to the first exit of `loc` leading to `target`.
    pub fn go_to_warp<L: Location + ?Sized>(
        &mut self,
        loc: &L,
        avatar: Position,
        target: &str,
    ) -> Result<Route, NavError> {
        self.ensure_idle()?;
        if loc.name() == target {
            log::debug!("already at {target}, not moving");
            return Err(NavError::AlreadyAt {
                location: target.to_owned(),
            });
        }
        let Some(warp) = loc.warps_to(target).first().copied() else {
            let available: Vec<String> = loc.warp_targets().into_iter().map(str::to_owned).collect();
            log::warn!(
                "no warp from {} to {target}; available: {}",
                loc.name(),
                available.join(", ")
            );
            return Err(NavError::NoWarp {
                location: loc.name().to_owned(),
                target: target.to_owned(),
                available,
            });
        };

        let from = avatar.tile();
        let to = warp.pos;
        let route = self.plan(loc, target, |finder| finder.find_path(from, to));
        self.start(route, avatar, || NavError::NoPath { from, to })
    }

    /// Walk next to the closest tile holding any of the configured debris.
    pub fn go_to_nearest_debris<L: Location + ?Sized>(
        &mut self,
        loc: &L,
        avatar: Position,
    ) -> Result<Route, NavError> {
        self.ensure_idle()?;
        let from = avatar.tile();
        let kinds = self.config.debris.clone();
        let route = self.plan(loc, "nearest debris", |finder| {
            finder.find_path_to_nearest_content(from, &kinds)
        });
        self.start(route, avatar, || NavError::NoDebris { from })
    }

    /// Walk to the tile `to` of `loc`.
    pub fn go_to<L: Location + ?Sized>(
        &mut self,
        loc: &L,
        avatar: Position,
        to: Point,
    ) -> Result<Route, NavError> {
        self.ensure_idle()?;
        let from = avatar.tile();
        let label = to.to_string();
        let route = self.plan(loc, &label, |finder| finder.find_path(from, to));
        self.start(route, avatar, || NavError::NoPath { from, to })
    }

    fn ensure_idle(&self) -> Result<(), NavError> {
        if self.walker.is_active() {
            log::warn!("navigation requested while walking, refused");
            return Err(NavError::WalkInProgress);
        }
        Ok(())
    }

    fn plan<L, F>(&self, loc: &L, label: &str, query: F) -> Route
    where
        L: Location + ?Sized,
        F: FnOnce(&PathFinder<'_>) -> Route,
    {
        let started = Instant::now();
        let map = SimpleMap::new(loc);
        let finder = PathFinder::new(map.tiles());
        let route = query(&finder);
        if self.config.log_timings {
            log::debug!(
                "pathfinding in {} for {label} took {:?}",
                loc.name(),
                started.elapsed()
            );
        }
        route
    }

    fn start(
        &mut self,
        route: Route,
        avatar: Position,
        not_found: impl FnOnce() -> NavError,
    ) -> Result<Route, NavError> {
        match self.walker.initiate(&mut self.input, &route, avatar) {
            WalkStart::Started => Ok(route),
            WalkStart::EmptyRoute => {
                let err = not_found();
                log::warn!("{err}");
                Err(err)
            }
            WalkStart::OriginMismatch { origin, avatar } => {
                Err(NavError::StaleOrigin { origin, avatar })
            }
        }
    }

    /// Advance the current walk by one tick.
    pub fn tick_outcome(&mut self, avatar: Position) -> TickOutcome {
        self.walker.tick(&mut self.input, avatar)
    }

    /// Advance the current walk by one tick. Returns whether it goes on.
    pub fn tick(&mut self, avatar: Position) -> bool {
        self.walker.on_tick(&mut self.input, avatar)
    }

    /// Abort the current walk.
    pub fn stop(&mut self) {
        self.walker.stop(&mut self.input);
    }

    /// Current keys without consuming edges.
    pub fn input(&self) -> InputState {
        self.input.state()
    }

    /// Current keys for this tick; edges are reset after reading.
    pub fn poll_input(&mut self) -> InputState {
        self.input.poll()
    }

    /// Tear the session down, returning the final (idle) key state.
    pub fn end_session(mut self) -> InputState {
        self.stop();
        self.input.poll()
    }
}
