use dioxus::prelude::*;

use crate::constants::{BORDER_STRONG, BORDER_SUBTLE, TEXT_DIM, TIMELINE_RULER_HEIGHT};
use crate::core::coords::CoordinateMapper;
use crate::core::ruler::{format_time_mark, ruler_marks};

/// Time ruler with tick marks and labels for the visible window.
/// All elements here use pointer-events: none so wheel and pan reach the host
#[component]
pub(crate) fn TimeRuler(mapper: CoordinateMapper) -> Element {
    let marks = ruler_marks(mapper.position, mapper.scale);
    let ready = mapper.is_ready();

    rsx! {
        div {
            style: "
                position: relative; height: {TIMELINE_RULER_HEIGHT}px; flex-shrink: 0;
                border-bottom: 1px solid {BORDER_SUBTLE}; overflow: hidden; pointer-events: none;
            ",
            if ready {
                for (i, time) in marks.minor.iter().copied().enumerate() {
                    {
                        let x = mapper.time_to_pixel(time);
                        rsx! {
                            div {
                                key: "minor-{i}",
                                style: "
                                    position: absolute; left: {x}px; bottom: 0;
                                    width: 1px; height: 5px; background-color: {BORDER_SUBTLE};
                                ",
                            }
                        }
                    }
                }
                for (i, time) in marks.major.iter().copied().enumerate() {
                    {
                        let x = mapper.time_to_pixel(time);
                        let label = format_time_mark(time);
                        rsx! {
                            div {
                                key: "major-{i}",
                                style: "
                                    position: absolute; left: {x}px; top: 0; bottom: 0;
                                    border-left: 1px solid {BORDER_STRONG};
                                ",
                                span {
                                    style: "
                                        position: absolute; left: 4px; top: 4px;
                                        font-size: 10px; font-family: 'SF Mono', Consolas, monospace;
                                        color: {TEXT_DIM}; white-space: nowrap;
                                    ",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
