use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FRAGMENTS_PER_ROW, TIMELINE_DEFAULT_SCALE_SECONDS, TIMELINE_SNAP_THRESHOLD_PX,
};

/// Timeline interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    /// Whether ctrl-drag snaps fragments to their neighbours
    #[serde(default = "default_snap_enabled")]
    pub snap_enabled: bool,
    /// Snap distance in pixels
    #[serde(default = "default_snap_distance_px")]
    pub snap_distance_px: f64,
    /// Seconds visible when the timeline is first shown
    #[serde(default = "default_initial_scale")]
    pub initial_scale: f64,
    /// Random fragments generated per row for a fresh timeline
    #[serde(default = "default_fragments_per_row")]
    pub fragments_per_row: usize,
}

fn default_snap_enabled() -> bool {
    true
}

fn default_snap_distance_px() -> f64 {
    TIMELINE_SNAP_THRESHOLD_PX
}

fn default_initial_scale() -> f64 {
    TIMELINE_DEFAULT_SCALE_SECONDS
}

fn default_fragments_per_row() -> usize {
    DEFAULT_FRAGMENTS_PER_ROW
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            snap_enabled: default_snap_enabled(),
            snap_distance_px: default_snap_distance_px(),
            initial_scale: default_initial_scale(),
            fragments_per_row: default_fragments_per_row(),
        }
    }
}
