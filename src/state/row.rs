use serde::{Deserialize, Serialize};

/// The fixed set of timeline rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimelineRow {
    Audio,
    Gesture,
    CameraZoom,
    Clothes,
    Background,
    Unknown,
    Text,
}

impl TimelineRow {
    /// Every row, top to bottom.
    pub const ALL: [TimelineRow; 7] = [
        TimelineRow::Audio,
        TimelineRow::Gesture,
        TimelineRow::CameraZoom,
        TimelineRow::Clothes,
        TimelineRow::Background,
        TimelineRow::Unknown,
        TimelineRow::Text,
    ];

    /// Row name as written in exported documents.
    pub fn key(self) -> &'static str {
        match self {
            TimelineRow::Audio => "audio",
            TimelineRow::Gesture => "gesture",
            TimelineRow::CameraZoom => "cameraZoom",
            TimelineRow::Clothes => "clothes",
            TimelineRow::Background => "background",
            TimelineRow::Unknown => "unknown",
            TimelineRow::Text => "text",
        }
    }

    /// Display label for the row header.
    pub fn label(self) -> &'static str {
        match self {
            TimelineRow::Audio => "Audio",
            TimelineRow::Gesture => "Gesture",
            TimelineRow::CameraZoom => "Camera Zoom",
            TimelineRow::Clothes => "Clothes",
            TimelineRow::Background => "Background",
            TimelineRow::Unknown => "Unknown",
            TimelineRow::Text => "Text",
        }
    }
}

/// One value per [`TimelineRow`].
///
/// Fields are spelled out so every row always has an entry; lookups go
/// through an exhaustive match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "V: Deserialize<'de> + Default"))]
pub struct RowMap<V> {
    #[serde(default)]
    pub audio: V,
    #[serde(default)]
    pub gesture: V,
    #[serde(default)]
    pub camera_zoom: V,
    #[serde(default)]
    pub clothes: V,
    #[serde(default)]
    pub background: V,
    #[serde(default)]
    pub unknown: V,
    #[serde(default)]
    pub text: V,
}

impl<V> RowMap<V> {
    /// Build a map by evaluating `f` for every row.
    pub fn from_fn(mut f: impl FnMut(TimelineRow) -> V) -> Self {
        Self {
            audio: f(TimelineRow::Audio),
            gesture: f(TimelineRow::Gesture),
            camera_zoom: f(TimelineRow::CameraZoom),
            clothes: f(TimelineRow::Clothes),
            background: f(TimelineRow::Background),
            unknown: f(TimelineRow::Unknown),
            text: f(TimelineRow::Text),
        }
    }

    pub fn get(&self, row: TimelineRow) -> &V {
        match row {
            TimelineRow::Audio => &self.audio,
            TimelineRow::Gesture => &self.gesture,
            TimelineRow::CameraZoom => &self.camera_zoom,
            TimelineRow::Clothes => &self.clothes,
            TimelineRow::Background => &self.background,
            TimelineRow::Unknown => &self.unknown,
            TimelineRow::Text => &self.text,
        }
    }

    pub fn get_mut(&mut self, row: TimelineRow) -> &mut V {
        match row {
            TimelineRow::Audio => &mut self.audio,
            TimelineRow::Gesture => &mut self.gesture,
            TimelineRow::CameraZoom => &mut self.camera_zoom,
            TimelineRow::Clothes => &mut self.clothes,
            TimelineRow::Background => &mut self.background,
            TimelineRow::Unknown => &mut self.unknown,
            TimelineRow::Text => &mut self.text,
        }
    }

    /// Iterate rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TimelineRow, &V)> {
        TimelineRow::ALL.into_iter().map(move |row| (row, self.get(row)))
    }
}
