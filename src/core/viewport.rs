//! Viewport state: how many seconds are visible and where the window starts.

use crate::constants::{TIMELINE_MAX_SCALE_SECONDS, TIMELINE_MIN_SCALE_SECONDS, TIMELINE_WHEEL_STEP_PX};

use super::coords::CoordinateMapper;

/// A wheel event reduced to what the viewport needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Vertical wheel delta; only its sign is used.
    pub delta_y: f64,
    /// Cursor x relative to the tracks container.
    pub cursor_x: f64,
    /// Ctrl held: zoom instead of pan.
    pub ctrl: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PanDrag {
    start_x: f64,
    start_position: f64,
}

/// Owns scale and position and applies wheel/middle-drag input to them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportController {
    scale: f64,
    position: f64,
    pan_drag: Option<PanDrag>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(crate::constants::TIMELINE_DEFAULT_SCALE_SECONDS, 0.0)
    }
}

/// Like `f64::signum` but 0 for a zero delta.
fn wheel_sign(delta: f64) -> f64 {
    if delta > 0.0 {
        1.0
    } else if delta < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl ViewportController {
    pub fn new(scale: f64, position: f64) -> Self {
        Self {
            scale: scale.clamp(TIMELINE_MIN_SCALE_SECONDS, TIMELINE_MAX_SCALE_SECONDS),
            position,
            pan_drag: None,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn mapper(&self, pixel_width: Option<f64>) -> CoordinateMapper {
        CoordinateMapper::new(self.scale, self.position, pixel_width)
    }

    /// Time step for one wheel notch at the current scale.
    fn wheel_step(&self, delta_pixels: f64, container_width: f64) -> f64 {
        TIMELINE_WHEEL_STEP_PX * wheel_sign(delta_pixels) / (container_width / self.scale)
    }

    /// Zoom by one wheel notch, keeping the time under `cursor_x` in place.
    ///
    /// Scale and position are both derived from the values before the call.
    pub fn zoom(&mut self, delta_pixels: f64, cursor_x: f64, container_width: f64) {
        if container_width <= 0.0 {
            return;
        }
        let delta = self.wheel_step(delta_pixels, container_width);
        let new_scale = (self.scale + delta).clamp(TIMELINE_MIN_SCALE_SECONDS, TIMELINE_MAX_SCALE_SECONDS);
        let applied = new_scale - self.scale;
        let new_position = self.position - applied * (cursor_x / container_width);
        self.scale = new_scale;
        self.position = new_position;
    }

    /// Scroll the window by one wheel notch.
    pub fn pan(&mut self, delta_pixels: f64, container_width: f64) {
        if container_width <= 0.0 {
            return;
        }
        self.position += self.wheel_step(delta_pixels, container_width);
    }

    /// Route a wheel event to zoom (ctrl) or pan. Returns false before layout.
    pub fn handle_wheel(&mut self, input: WheelInput, container_width: Option<f64>) -> bool {
        let Some(width) = container_width.filter(|w| *w > 0.0) else {
            return false;
        };
        if input.ctrl {
            self.zoom(input.delta_y, input.cursor_x, width);
        } else {
            self.pan(input.delta_y, width);
        }
        true
    }

    pub fn is_pan_dragging(&self) -> bool {
        self.pan_drag.is_some()
    }

    /// Middle button pressed: anchor the pan at `cursor_x`.
    pub fn begin_pan_drag(&mut self, cursor_x: f64) {
        self.pan_drag = Some(PanDrag {
            start_x: cursor_x,
            start_position: self.position,
        });
    }

    /// Follow the pointer during a middle-button pan. Returns true if moved.
    pub fn pan_drag_to(&mut self, cursor_x: f64, container_width: Option<f64>) -> bool {
        let (Some(drag), Some(width)) = (self.pan_drag, container_width.filter(|w| *w > 0.0)) else {
            return false;
        };
        let delta_time = (cursor_x - drag.start_x) / width * self.scale;
        self.position = drag.start_position - delta_time;
        true
    }

    pub fn end_pan_drag(&mut self) {
        self.pan_drag = None;
    }
}
