//! Walking routes with simulated directional input.
//!
//! The pieces, bottom-up:
//!
//! - [`InputSimulator`] holds the movement keys the host reads each tick and
//!   lets only one walker drive them at a time.
//! - [`PathWalker`] is the per-tick state machine following a
//!   [`wayfarer_paths::Route`].
//! - [`Navigator`] plans routes for high-level requests ("go to the bus
//!   stop", "go to the nearest debris") and owns one simulator and walker.

mod config;
mod direction;
mod error;
mod input;
mod navigator;
mod walker;

pub use config::{NavConfig, WalkConfig};
pub use direction::Direction;
pub use error::NavError;
pub use input::{InputSimulator, InputState, MoveFlags, WalkerId};
pub use navigator::Navigator;
pub use walker::{PathWalker, TickOutcome, WalkStart, WalkState};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use wayfarer_core::Content;

    #[test]
    fn nav_config_fills_missing_fields() {
        let config: NavConfig = serde_json::from_str(r#"{"log_timings": false}"#).unwrap();
        assert!(!config.log_timings);
        assert_eq!(config.walk, WalkConfig::default());
        assert_eq!(config.debris, Content::DEBRIS.to_vec());
    }

    #[test]
    fn nav_config_round_trip() {
        let config = NavConfig {
            walk: WalkConfig {
                off_course_radius: 2,
            },
            debris: vec![Content::Stone, Content::Weeds],
            log_timings: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: NavConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
