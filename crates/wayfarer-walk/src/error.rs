use wayfarer_core::Point;

/// Reasons a navigation request did not start a walk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("already at {location}")]
    AlreadyAt { location: String },

    #[error("no warp from {location} to {target}; available: {}", .available.join(", "))]
    NoWarp {
        location: String,
        target: String,
        available: Vec<String>,
    },

    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },

    #[error("no reachable debris from {from}")]
    NoDebris { from: Point },

    #[error("a walk is already in progress")]
    WalkInProgress,

    #[error("route starts at {origin} but the avatar is at {avatar}")]
    StaleOrigin { origin: Point, avatar: Point },
}
