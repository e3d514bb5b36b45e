//! State management module
//!
//! This module contains the core data structures for the application:
//! - TimelineRow / RowMap: the fixed row kinds and a value per row
//! - Fragment: a timed item placed on a row
//! - Timeline: the fragment store
//! - TimelineDocument: the export/import unit, with its settings

mod row;
mod fragment;
mod timeline;
mod settings;
mod document;
mod persistence;

pub use row::{RowMap, TimelineRow};
pub use fragment::{Fragment, FragmentLabel};
pub use timeline::{SnapPoints, Timeline};
pub use settings::TimelineSettings;
pub use document::TimelineDocument;
pub use persistence::DEFAULT_EXPORT_FILE_NAME;
