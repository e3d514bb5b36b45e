use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload shown on a fragment in the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentLabel {
    pub label: String,
}

impl FragmentLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// A timed item placed on a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment<T> {
    /// Unique identifier
    pub id: Uuid,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, never before `start`
    pub end: f64,
    /// Caller-defined payload
    pub data: T,
}

impl<T> Fragment<T> {
    /// Create a new fragment; the times are ordered if given reversed.
    pub fn new(start: f64, end: f64, data: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            start: start.min(end),
            end: start.max(end),
            data,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Move the fragment so it starts at `new_start`, keeping its duration.
    pub fn shift_to(&mut self, new_start: f64) {
        let delta = new_start - self.start;
        self.start += delta;
        self.end += delta;
    }
}
