//! In-memory host for driving wayfarer navigation without a game.
//!
//! [`SimWorld`] plays the game's part: it holds location snapshots, moves
//! the avatar according to the keys a [`Navigator`] holds, and teleports it
//! through exits. [`run_until_idle`] ties both together tick by tick.

mod scatter;
mod world;

use wayfarer_walk::{Navigator, TickOutcome};

pub use scatter::scatter_debris;
pub use world::{DEFAULT_SPEED, SimWorld, StepEvent};

/// How a [`run_until_idle`] call ended.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Ticks the navigator was asked to advance.
    pub ticks: u32,
    /// The final tick outcome. [`TickOutcome::Walking`] means the tick budget
    /// ran out and the walk was stopped.
    pub outcome: TickOutcome,
    /// Locations entered through exits, in order.
    pub warps: Vec<String>,
}

impl RunSummary {
    pub fn timed_out(&self) -> bool {
        self.outcome == TickOutcome::Walking
    }
}

/// Tick `nav` against `world` until the walk ends or `max_ticks` pass.
pub fn run_until_idle(world: &mut SimWorld, nav: &mut Navigator, max_ticks: u32) -> RunSummary {
    let mut warps = Vec::new();
    let mut outcome = TickOutcome::Idle;
    let mut ticks = 0;
    while ticks < max_ticks {
        ticks += 1;
        outcome = nav.tick_outcome(world.avatar());
        if outcome != TickOutcome::Walking {
            break;
        }
        let input = nav.poll_input();
        if let StepEvent::Warped { location, .. } = world.step(&input) {
            warps.push(location);
        }
    }
    if outcome == TickOutcome::Walking {
        log::warn!("walk still running after {max_ticks} ticks, stopping");
        nav.stop();
    }
    RunSummary {
        ticks,
        outcome,
        warps,
    }
}
