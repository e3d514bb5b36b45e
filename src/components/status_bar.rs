use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn StatusBar(
    message: String,
    scale: f64,
    position: f64,
    fragment_summary: String,
    end_time: f64,
    snap_enabled: bool,
) -> Element {
    let snap = if snap_enabled { "snap" } else { "free" };
    let window = format!("{:.1}s + {:.1}s", position, scale);
    let end = format!("ends {:.1}s", end_time);
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{message}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{fragment_summary}" }
                span { "{end}" }
                span { "{snap}" }
                span { "{window}" }
            }
        }
    }
}
