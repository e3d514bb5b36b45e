use dioxus::prelude::*;
use std::sync::Arc;

use crate::constants::{
    BG_BASE, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, TEXT_DIM, TEXT_MUTED,
    TIMELINE_LABEL_WIDTH, TIMELINE_RULER_HEIGHT, TIMELINE_WHEEL_STEP_PX,
};
use crate::core::viewport::{ViewportController, WheelInput};
use crate::state::{FragmentLabel, Timeline, TimelineRow};

use super::ruler::TimeRuler;
use super::track_label::TrackLabel;
use super::track_row::TrackRow;
use super::{row_color, TimelineHostBounds};

/// Element id the viewport script measures.
pub(crate) const TRACKS_HOST_ID: &str = "timeline-tracks-host";

fn is_button(e: &MouseEvent, name: &str) -> bool {
    e.trigger_button()
        .map(|btn| format!("{:?}", btn) == name)
        .unwrap_or(false)
}

/// Main timeline panel: header, row labels, ruler and fragment rows.
#[component]
pub fn TimelinePanel(
    rows: Timeline<FragmentLabel>,
    viewport: Signal<ViewportController>,
    host_bounds: Option<TimelineHostBounds>,
    snap_enabled: bool,
    snap_distance_px: f64,
    on_fragment_move: EventHandler<(TimelineRow, uuid::Uuid, f64)>,  // (row, fragment_id, new_start)
    on_add_fragment: EventHandler<TimelineRow>,
) -> Element {
    let mut viewport = viewport;
    let width = host_bounds.and_then(|b| b.usable_width());
    let controller = viewport();
    let mapper = controller.mapper(width);
    let timeline = Arc::new(rows.clone());
    let is_panning = controller.is_pan_dragging();
    let host_cursor = if is_panning { "grabbing" } else { "default" };

    let scale_label = format!("{:.1}s", controller.scale());
    let position_label = format!("{:.1}s", controller.position());

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; flex: 1; min-height: 0;
                background-color: {BG_ELEVATED}; overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }

                    // Zoom controls, centered on the visible window
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer;",
                            title: "Zoom out",
                            onclick: move |_| {
                                if let Some(w) = width {
                                    viewport.write().zoom(TIMELINE_WHEEL_STEP_PX, w / 2.0, w);
                                }
                            },
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 48px; text-align: center;",
                            "{scale_label}"
                        }
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer;",
                            title: "Zoom in",
                            onclick: move |_| {
                                if let Some(w) = width {
                                    viewport.write().zoom(-TIMELINE_WHEEL_STEP_PX, w / 2.0, w);
                                }
                            },
                            "+"
                        }
                    }
                }
                span {
                    style: "font-size: 10px; color: {TEXT_DIM};",
                    "from {position_label} · wheel pans · ctrl+wheel zooms · middle-drag scrolls"
                }
            }

            // Body
            div {
                style: "display: flex; flex: 1; min-height: 0; overflow-y: auto;",

                // Row labels
                div {
                    style: "
                        width: {TIMELINE_LABEL_WIDTH}px; flex-shrink: 0;
                        border-right: 1px solid {BORDER_SUBTLE}; background-color: {BG_ELEVATED};
                    ",
                    div { style: "height: {TIMELINE_RULER_HEIGHT}px; border-bottom: 1px solid {BORDER_SUBTLE}; box-sizing: border-box;" }
                    for row in TimelineRow::ALL {
                        TrackLabel {
                            key: "{row.key()}",
                            row: row,
                            color: row_color(row),
                            fragment_count: rows.get(row).len(),
                            on_add: on_add_fragment,
                        }
                    }
                }

                // Tracks host: measured by the viewport script, receives wheel and middle-drag
                div {
                    id: TRACKS_HOST_ID,
                    style: "
                        position: relative; flex: 1; min-width: 0; overflow: hidden;
                        display: flex; flex-direction: column;
                        background-color: {BG_BASE}; cursor: {host_cursor};
                    ",
                    onwheel: move |e| {
                        e.prevent_default();
                        let input = WheelInput {
                            delta_y: e.delta().strip_units().y,
                            cursor_x: host_bounds.unwrap_or_default().local_x(e.client_coordinates().x),
                            ctrl: e.modifiers().ctrl(),
                        };
                        viewport.write().handle_wheel(input, width);
                    },
                    onmousedown: move |e| {
                        if is_button(&e, "Auxiliary") {
                            e.prevent_default();
                            viewport.write().begin_pan_drag(e.client_coordinates().x);
                        }
                    },
                    onmousemove: move |e| {
                        if viewport.peek().is_pan_dragging() {
                            viewport.write().pan_drag_to(e.client_coordinates().x, width);
                        }
                    },
                    onmouseup: move |e| {
                        if is_button(&e, "Auxiliary") {
                            viewport.write().end_pan_drag();
                        }
                    },

                    TimeRuler { mapper: mapper }

                    for row in TimelineRow::ALL {
                        TrackRow {
                            key: "{row.key()}",
                            row: row,
                            fragments: rows.get(row).clone(),
                            timeline: timeline.clone(),
                            mapper: mapper,
                            snap_enabled: snap_enabled,
                            snap_distance_px: snap_distance_px,
                            on_fragment_move: on_fragment_move,
                        }
                    }
                }
            }
        }
    }
}
