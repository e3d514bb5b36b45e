use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FragmentLabel, Timeline, TimelineSettings};

/// The unit written to and read from exported JSON files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    /// Schema version for future compatibility
    pub version: String,
    /// Document name
    pub name: String,
    /// When the document was last exported
    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub settings: TimelineSettings,
    /// Fragments keyed by row name
    pub rows: Timeline<FragmentLabel>,
}

impl Default for TimelineDocument {
    fn default() -> Self {
        Self::new("Untitled Timeline")
    }
}

impl TimelineDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            exported_at: None,
            settings: TimelineSettings::default(),
            rows: Timeline::empty(),
        }
    }
}
