use dioxus::prelude::*;
use crate::constants::{BORDER_SUBTLE, TEXT_MUTED, TEXT_SECONDARY, TIMELINE_ROW_HEIGHT};
use crate::state::TimelineRow;

/// Row label in the sidebar, with a button that adds a random fragment
#[component]
pub fn TrackLabel(
    row: TimelineRow,
    color: &'static str,
    fragment_count: usize,
    on_add: EventHandler<TimelineRow>,
) -> Element {
    let name = row.label();
    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 10px; height: {TIMELINE_ROW_HEIGHT}px;
                padding: 0 8px 0 12px; border-bottom: 1px solid {BORDER_SUBTLE};
                font-size: 12px; color: {TEXT_SECONDARY}; box-sizing: border-box;
            ",
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {color};" }
            span { style: "flex: 1; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;", "{name}" }
            span { style: "font-size: 10px; color: {TEXT_MUTED};", "{fragment_count}" }
            button {
                class: "collapse-btn",
                title: "Add a random fragment",
                onclick: move |_| on_add.call(row),
                "+"
            }
        }
    }
}
