//! Timeline module
//!
//! Ruler, row labels and the draggable fragments, drawn through one
//! coordinate mapper shared by the whole panel.

mod panel;
mod ruler;
mod track_label;
mod track_row;
mod fragment_element;

pub use panel::TimelinePanel;

use serde::Deserialize;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_BACKGROUND, ACCENT_CAMERA, ACCENT_CLOTHES, ACCENT_GESTURE, ACCENT_TEXT,
    ACCENT_UNKNOWN,
};
use crate::state::TimelineRow;

pub(crate) const MIN_FRAGMENT_WIDTH_PX: f64 = 2.0;

/// On-screen bounds of the tracks host, as reported by the viewport script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct TimelineHostBounds {
    pub left: f64,
    pub width: f64,
}

impl TimelineHostBounds {
    /// Width to feed the mapper; `None` until the host has been laid out.
    pub fn usable_width(&self) -> Option<f64> {
        (self.width > 0.0).then_some(self.width)
    }

    /// Cursor x relative to the host's left edge.
    pub fn local_x(&self, client_x: f64) -> f64 {
        client_x - self.left
    }
}

pub(crate) fn row_color(row: TimelineRow) -> &'static str {
    match row {
        TimelineRow::Audio => ACCENT_AUDIO,
        TimelineRow::Gesture => ACCENT_GESTURE,
        TimelineRow::CameraZoom => ACCENT_CAMERA,
        TimelineRow::Clothes => ACCENT_CLOTHES,
        TimelineRow::Background => ACCENT_BACKGROUND,
        TimelineRow::Unknown => ACCENT_UNKNOWN,
        TimelineRow::Text => ACCENT_TEXT,
    }
}
