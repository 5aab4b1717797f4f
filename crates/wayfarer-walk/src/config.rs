use wayfarer_core::Content;

/// Path walker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkConfig {
    /// Largest Chebyshev distance, in tiles, between the avatar and the next
    /// waypoint before the walk is aborted as off course.
    pub off_course_radius: i32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            off_course_radius: 1,
        }
    }
}

/// Navigator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    pub walk: WalkConfig,
    /// Contents targeted by [`crate::Navigator::go_to_nearest_debris`].
    pub debris: Vec<Content>,
    /// Log how long each pathfinding request took, at debug level.
    pub log_timings: bool,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            walk: WalkConfig::default(),
            debris: Content::DEBRIS.to_vec(),
            log_timings: true,
        }
    }
}
