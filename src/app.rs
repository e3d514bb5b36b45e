//! Root application component
//!
//! Owns the timeline document and the viewport, wires the title bar,
//! the timeline panel and hotkeys together, and runs file import/export.

use dioxus::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use crate::components::{AppView, DraggableDemo, StatusBar, TitleBar};
use crate::constants::*;
use crate::core::generator;
use crate::core::viewport::ViewportController;
use crate::error::{Result, TimelineError};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{TimelineDocument, TimelineRow, DEFAULT_EXPORT_FILE_NAME};
use crate::timeline::{TimelineHostBounds, TimelinePanel};

fn fresh_document() -> TimelineDocument {
    let mut document = TimelineDocument::default();
    document.rows = generator::populate(&mut rand::thread_rng(), document.settings.fragments_per_row);
    document
}

fn pick_export_path() -> Result<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(DEFAULT_EXPORT_FILE_NAME)
        .add_filter("JSON", &["json"])
        .save_file()
        .ok_or(TimelineError::NoFileSelected)
}

fn pick_import_path() -> Result<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON", &["json"])
        .pick_file()
        .ok_or(TimelineError::NoFileSelected)
}

/// Export through a save dialog. Returns the status line to show.
fn export_document(mut document: Signal<TimelineDocument>) -> String {
    let result = pick_export_path().and_then(|path| {
        document.write().export_to(&path)?;
        Ok(path)
    });
    match result {
        Ok(path) => format!("Exported {}", path.display()),
        Err(TimelineError::NoFileSelected) => "Export cancelled".to_string(),
        Err(err) => {
            tracing::error!(%err, "timeline export failed");
            format!("Export failed: {}", err)
        }
    }
}

/// Import through an open dialog. The current document is kept on any failure.
fn import_document(mut document: Signal<TimelineDocument>) -> String {
    let result = pick_import_path().and_then(|path| {
        document.write().replace_from_path(&path)?;
        Ok(path)
    });
    match result {
        Ok(path) => {
            let count = document.peek().rows.len();
            format!("Imported {} fragments from {}", count, path.display())
        }
        Err(TimelineError::NoFileSelected) => "Import cancelled".to_string(),
        Err(err) => {
            tracing::warn!(%err, "timeline import rejected");
            format!("Import failed: {}", err)
        }
    }
}

/// Root application component
#[component]
pub fn App() -> Element {
    let mut timeline_doc = use_signal(fresh_document);
    let mut viewport = use_signal(|| {
        ViewportController::new(timeline_doc.peek().settings.initial_scale, 0.0)
    });
    let mut host_bounds = use_signal(|| None::<TimelineHostBounds>);
    let mut host_eval = use_signal(|| None::<document::Eval>);
    let mut status = use_signal(|| "Ready".to_string());
    let mut view = use_signal(AppView::default);

    use_effect(move || {
        if host_eval.peek().is_some() {
            return;
        }
        host_eval.set(Some(document::eval(TIMELINE_VIEWPORT_SCRIPT)));
    });

    use_future(move || async move {
        loop {
            let Some(eval) = host_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            let mut eval = eval;
            loop {
                match eval.recv::<TimelineHostBounds>().await {
                    Ok(bounds) => {
                        if host_bounds() != Some(bounds) {
                            tracing::trace!(left = bounds.left, width = bounds.width, "timeline host resized");
                            host_bounds.set(Some(bounds));
                        }
                    }
                    Err(err) => {
                        tracing::debug!(?err, "timeline viewport listener stopped");
                        break;
                    }
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let doc = timeline_doc.read();
    let rows = doc.rows.clone();
    let settings = doc.settings.clone();
    let document_name = doc.name.clone();
    let fragment_summary = if rows.is_empty() {
        "No fragments".to_string()
    } else {
        format!("{} fragments", rows.len())
    };
    let end_time = rows.end_time();
    drop(doc);

    let controller = viewport();
    let current_view = view();
    let timeline_display = if current_view == AppView::Timeline { "flex" } else { "none" };
    let host_width = host_bounds().and_then(|b| b.usable_width());

    rsx! {
        // Global CSS
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            "#
        }

        // Main app container
        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                outline: none;
            ",
            oncontextmenu: move |e| e.prevent_default(),
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    timeline_visible: view() == AppView::Timeline,
                    input_focused: false,
                };
                let modifiers = e.modifiers();

                match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.meta(), &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        tracing::debug!(?action, "hotkey");
                        match action {
                            HotkeyAction::TimelineZoomIn => {
                                if let Some(w) = host_width {
                                    viewport.write().zoom(-TIMELINE_WHEEL_STEP_PX, w / 2.0, w);
                                }
                            }
                            HotkeyAction::TimelineZoomOut => {
                                if let Some(w) = host_width {
                                    viewport.write().zoom(TIMELINE_WHEEL_STEP_PX, w / 2.0, w);
                                }
                            }
                            HotkeyAction::TimelinePanLeft => {
                                if let Some(w) = host_width {
                                    viewport.write().pan(-TIMELINE_WHEEL_STEP_PX, w);
                                }
                            }
                            HotkeyAction::TimelinePanRight => {
                                if let Some(w) = host_width {
                                    viewport.write().pan(TIMELINE_WHEEL_STEP_PX, w);
                                }
                            }
                            HotkeyAction::ExportTimeline => status.set(export_document(timeline_doc)),
                            HotkeyAction::ImportTimeline => status.set(import_document(timeline_doc)),
                            HotkeyAction::ToggleSnapping => {
                                let mut doc = timeline_doc.write();
                                doc.settings.snap_enabled = !doc.settings.snap_enabled;
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                document_name: document_name,
                view: current_view,
                snap_enabled: settings.snap_enabled,
                on_export: move |_| status.set(export_document(timeline_doc)),
                on_import: move |_| status.set(import_document(timeline_doc)),
                on_regenerate: move |_| {
                    let per_row = timeline_doc.peek().settings.fragments_per_row;
                    timeline_doc.write().rows = generator::populate(&mut rand::thread_rng(), per_row);
                    status.set("Generated new fragments".to_string());
                },
                on_toggle_snap: move |_| {
                    let mut doc = timeline_doc.write();
                    doc.settings.snap_enabled = !doc.settings.snap_enabled;
                },
                on_toggle_view: move |_| {
                    let next = match view() {
                        AppView::Timeline => AppView::DraggableDemo,
                        AppView::DraggableDemo => AppView::Timeline,
                    };
                    view.set(next);
                },
            }

            // Both views stay mounted so the viewport script keeps observing the host.
            div {
                style: "display: {timeline_display}; flex-direction: column; flex: 1; min-height: 0;",
                TimelinePanel {
                    rows: rows,
                    viewport: viewport,
                    host_bounds: host_bounds(),
                    snap_enabled: settings.snap_enabled,
                    snap_distance_px: settings.snap_distance_px,
                    on_fragment_move: move |(row, id, new_start): (TimelineRow, uuid::Uuid, f64)| {
                        let mut doc = timeline_doc.write();
                        match doc.rows.find(row, id).map(|f| f.start) {
                            Some(from) => {
                                doc.rows.shift_fragment(row, id, new_start);
                                tracing::debug!(%id, row = row.key(), from, to = new_start, "fragment moved");
                            }
                            None => tracing::warn!(%id, row = row.key(), "dragged fragment no longer in store"),
                        }
                    },
                    on_add_fragment: move |row: TimelineRow| {
                        let fragment = generator::random_fragment(&mut rand::thread_rng());
                        tracing::debug!(row = row.key(), start = fragment.start, "adding fragment");
                        timeline_doc.write().rows.push(row, fragment);
                    },
                }
            }
            if current_view == AppView::DraggableDemo {
                DraggableDemo {}
            }

            StatusBar {
                message: status(),
                scale: controller.scale(),
                position: controller.position(),
                fragment_summary: fragment_summary,
                end_time: end_time,
                snap_enabled: settings.snap_enabled,
            }
        }
    }
}
