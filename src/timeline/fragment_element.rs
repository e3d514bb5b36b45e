use dioxus::prelude::*;
use std::sync::Arc;

use crate::constants::{BORDER_ACCENT, TEXT_PRIMARY};
use crate::core::coords::CoordinateMapper;
use crate::core::drag::{DragContext, FragmentDrag, PointerSample};
use crate::state::{Fragment, FragmentLabel, Timeline};

use super::MIN_FRAGMENT_WIDTH_PX;

/// Draggable fragment bar. Moves live in pixel space and commits the new
/// start time once on release.
#[component]
pub(crate) fn FragmentElement(
    fragment: Fragment<FragmentLabel>,
    timeline: Arc<Timeline<FragmentLabel>>,
    mapper: CoordinateMapper,
    color: &'static str,
    snap_enabled: bool,
    snap_distance_px: f64,
    on_drag_end: EventHandler<(uuid::Uuid, f64)>,  // (fragment_id, new_start)
) -> Element {
    let mut drag = use_signal(FragmentDrag::default);

    let fragment_id = fragment.id;
    let fragment_start = fragment.start;
    let fragment_end = fragment.end;
    let resting_left = mapper.time_to_pixel(fragment_start);
    let width = (mapper.time_to_pixel(fragment_end) - resting_left).max(MIN_FRAGMENT_WIDTH_PX);
    let is_dragging = drag.read().is_dragging();
    let left = drag.read().live_left().unwrap_or(resting_left);
    let label = fragment.data.label.clone();
    let title = format!("{} ({:.1}s - {:.1}s)", label, fragment_start, fragment_end);

    let (z_index, border, shadow) = if is_dragging {
        (100, BORDER_ACCENT, "0 6px 16px rgba(0, 0, 0, 0.55)")
    } else {
        (1, color, "none")
    };
    let cursor = if is_dragging { "grabbing" } else { "grab" };

    let mut finish = move |cursor_x: f64| {
        let ctx = DragContext {
            fragment_start,
            fragment_end,
            snap_distance_px,
        };
        match drag.write().release(cursor_x, &ctx) {
            Some(new_start) => {
                tracing::debug!(%fragment_id, new_start, "fragment drag committed");
                on_drag_end.call((fragment_id, new_start));
            }
            None => tracing::debug!(%fragment_id, "fragment drag dropped before layout"),
        }
    };

    rsx! {
        div {
            style: "
                position: absolute; left: {left}px; top: 4px; bottom: 4px; width: {width}px;
                background-color: {color}33; border: 1px solid {border}; border-radius: 4px;
                box-sizing: border-box; padding: 0 6px; overflow: hidden;
                display: flex; align-items: center; user-select: none;
                z-index: {z_index}; box-shadow: {shadow}; cursor: {cursor};
            ",
            title: "{title}",
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        e.stop_propagation();
                        let snap_points = snap_enabled.then(|| timeline.snap_points_excluding(fragment_id));
                        drag.write().begin(e.client_coordinates().x, &mapper, fragment_start, snap_points);
                    }
                }
            },
            span {
                style: "font-size: 11px; color: {TEXT_PRIMARY}; white-space: nowrap; pointer-events: none;",
                "{label}"
            }
        }

        // Global drag overlay - captures all mouse events while dragging
        if is_dragging {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                onmousemove: move |e| {
                    let coords = e.client_coordinates();
                    let pointer = PointerSample {
                        x: coords.x,
                        y: coords.y,
                        ctrl: e.modifiers().ctrl(),
                    };
                    let ctx = DragContext {
                        fragment_start,
                        fragment_end,
                        snap_distance_px,
                    };
                    drag.write().drag_to(pointer, &ctx);
                },
                // Keep the viewport still under an active drag
                onwheel: move |e| {
                    e.prevent_default();
                    e.stop_propagation();
                },
                onmouseup: move |e| finish(e.client_coordinates().x),
                onmouseleave: move |e| finish(e.client_coordinates().x),
            }
        }
    }
}
