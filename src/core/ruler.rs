//! Tick marks for the time ruler above the rows.

use crate::constants::{RULER_MAJOR_STEP_SECONDS, RULER_MINOR_STEPS};

/// Tick times visible in the window `[position, position + scale)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RulerMarks {
    /// Labelled ticks every major step.
    pub major: Vec<f64>,
    /// Small ticks between labels.
    pub minor: Vec<f64>,
}

/// Ticks for the visible window, starting at the major step at or before `position`.
pub fn ruler_marks(position: f64, scale: f64) -> RulerMarks {
    let mut marks = RulerMarks::default();
    if !(scale > 0.0) || !position.is_finite() {
        return marks;
    }
    let first = (position / RULER_MAJOR_STEP_SECONDS).floor() * RULER_MAJOR_STEP_SECONDS;
    let visible_end = position + scale;
    let minor_step = RULER_MAJOR_STEP_SECONDS / RULER_MINOR_STEPS as f64;

    let mut i = 0_u32;
    loop {
        let t = first + i as f64 * RULER_MAJOR_STEP_SECONDS;
        if t >= visible_end {
            break;
        }
        marks.major.push(t);
        i += 1;
    }

    let mut j = 0_u32;
    loop {
        let t = first + j as f64 * minor_step;
        if t >= visible_end {
            break;
        }
        marks.minor.push(t);
        j += 1;
    }

    marks
}

/// Label like `2:05` or `-0:30`.
pub fn format_time_mark(seconds: f64) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let total = seconds.abs();
    let minutes = (total / 60.0).trunc() as u64;
    let secs = (total % 60.0).trunc() as u64;
    format!("{}{}:{:02}", sign, minutes, secs)
}
