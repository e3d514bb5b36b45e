use dioxus::prelude::*;
use std::sync::Arc;

use crate::constants::{BG_BASE, BORDER_SUBTLE, TIMELINE_ROW_HEIGHT};
use crate::core::coords::CoordinateMapper;
use crate::state::{Fragment, FragmentLabel, Timeline, TimelineRow};

use super::fragment_element::FragmentElement;
use super::row_color;

/// Track row content area
#[component]
pub fn TrackRow(
    row: TimelineRow,
    fragments: Vec<Fragment<FragmentLabel>>,
    timeline: Arc<Timeline<FragmentLabel>>,  // whole store, for snap points on other rows
    mapper: CoordinateMapper,
    snap_enabled: bool,
    snap_distance_px: f64,
    on_fragment_move: EventHandler<(TimelineRow, uuid::Uuid, f64)>,
) -> Element {
    let color = row_color(row);

    rsx! {
        div {
            style: "
                position: relative; height: {TIMELINE_ROW_HEIGHT}px; box-sizing: border-box;
                background-color: {BG_BASE}; border-bottom: 1px solid {BORDER_SUBTLE};
            ",
            // Fragments are only placed once the host has a width
            if mapper.is_ready() {
                for fragment in fragments.iter().cloned() {
                    FragmentElement {
                        key: "{fragment.id}",
                        fragment: fragment,
                        timeline: timeline.clone(),
                        mapper: mapper,
                        color: color,
                        snap_enabled: snap_enabled,
                        snap_distance_px: snap_distance_px,
                        on_drag_end: move |(id, new_start): (uuid::Uuid, f64)| on_fragment_move.call((row, id, new_start)),
                    }
                }
            }
        }
    }
}
