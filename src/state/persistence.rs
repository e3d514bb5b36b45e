use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use super::TimelineDocument;

/// File name offered by the export dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "graph.json";

impl TimelineDocument {
    // =========================================================================
    // Export/Import
    // =========================================================================

    /// Serialize to pretty JSON with a one-space indent.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        // serde_json only writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parse a document. Nothing is validated beyond the JSON shape.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Write the document to `path`, stamping the export time once the file
    /// is written. On failure `self` is left as it was.
    pub fn export_to(&mut self, path: &Path) -> Result<()> {
        let mut stamped = self.clone();
        stamped.exported_at = Some(chrono::Utc::now());
        let json = stamped.to_json()?;
        fs::write(path, json)?;
        self.exported_at = stamped.exported_at;
        tracing::info!(path = %path.display(), fragments = self.rows.len(), "exported timeline");
        Ok(())
    }

    /// Read and parse a document from `path`.
    pub fn import_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let document = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), fragments = document.rows.len(), "imported timeline");
        Ok(document)
    }

    /// Replace `self` with the document at `path`. On any read or parse
    /// error the current document is kept.
    pub fn replace_from_path(&mut self, path: &Path) -> Result<()> {
        *self = Self::import_from(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimelineError;
    use crate::state::{Fragment, FragmentLabel, TimelineRow};

    fn sample_document() -> TimelineDocument {
        let mut document = TimelineDocument::new("Sample");
        document
            .rows
            .push(TimelineRow::Audio, Fragment::new(5.0, 15.0, FragmentLabel::new("mint sheep")));
        document
            .rows
            .push(TimelineRow::CameraZoom, Fragment::new(-10.0, 2.5, FragmentLabel::new("legal horn")));
        document
    }

    #[test]
    fn test_json_uses_row_keys_and_single_space_indent() {
        let json = sample_document().to_json().unwrap();
        assert!(json.contains("\"cameraZoom\""));
        assert!(json.contains("\n \"version\""));
    }

    #[test]
    fn test_json_round_trip() {
        let document = sample_document();
        let parsed = TimelineDocument::from_json(&document.to_json().unwrap()).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = TimelineDocument::from_json("{ \"version\": ");
        assert!(matches!(result, Err(TimelineError::Json(_))));
    }

    fn temp_path(prefix: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}-{}.json", prefix, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_failed_import_leaves_state_untouched() {
        let path = temp_path("broken");
        fs::write(&path, "{ \"version\": \"1.0\", \"rows\": [").unwrap();

        let mut current = sample_document();
        let before = current.clone();
        let result = current.replace_from_path(&path);
        let _ = fs::remove_file(&path);

        assert!(matches!(result, Err(TimelineError::Json(_))));
        assert_eq!(current, before);
    }

    #[test]
    fn test_replace_from_path_swaps_document() {
        let path = temp_path("replace");
        let mut source = sample_document();
        source.export_to(&path).unwrap();

        let mut current = TimelineDocument::new("Other");
        current.replace_from_path(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(current, source);
    }

    #[test]
    fn test_failed_export_leaves_document_untouched() {
        let dir = std::env::temp_dir().join(format!("missing-dir-{}", uuid::Uuid::new_v4()));
        let mut document = sample_document();
        let before = document.clone();

        let result = document.export_to(&dir.join("timeline.json"));

        assert!(matches!(result, Err(TimelineError::Io(_))));
        assert_eq!(document, before);
        assert!(document.exported_at.is_none());
    }

    #[test]
    fn test_export_then_import_file() {
        let path = std::env::temp_dir().join(format!("timeline-{}.json", uuid::Uuid::new_v4()));
        let mut document = sample_document();
        document.export_to(&path).unwrap();
        assert!(document.exported_at.is_some());

        let loaded = TimelineDocument::import_from(&path).unwrap();
        assert_eq!(loaded, document);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        let result = TimelineDocument::import_from(&path);
        assert!(matches!(result, Err(TimelineError::Io(_))));
    }
}
