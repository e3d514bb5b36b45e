use dioxus::prelude::*;
use crate::constants::*;

/// Which main view is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Timeline,
    DraggableDemo,
}

#[component]
pub fn TitleBar(
    document_name: String,
    view: AppView,
    snap_enabled: bool,
    on_export: EventHandler<MouseEvent>,
    on_import: EventHandler<MouseEvent>,
    on_regenerate: EventHandler<MouseEvent>,
    on_toggle_snap: EventHandler<MouseEvent>,
    on_toggle_view: EventHandler<MouseEvent>,
) -> Element {
    let snap_toggle_bg = if snap_enabled { BG_HOVER } else { BG_BASE };
    let snap_label = if snap_enabled { "Snap: On" } else { "Snap: Off" };
    let view_label = match view {
        AppView::Timeline => "Draggable Demo",
        AppView::DraggableDemo => "Timeline",
    };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Fragment Timeline" }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    title: "Export to JSON (Ctrl+S)",
                    onclick: move |e| on_export.call(e),
                    "Export"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    title: "Import from JSON (Ctrl+O)",
                    onclick: move |e| on_import.call(e),
                    "Import"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_regenerate.call(e),
                    "Regenerate"
                }
            }
            span { style: "font-size: 13px; color: {TEXT_MUTED};", "{document_name}" }
            div {
                style: "display: flex; align-items: center; justify-content: flex-end; gap: 12px; min-width: 220px;",
                button {
                    class: "collapse-btn",
                    style: "
                        background-color: {snap_toggle_bg}; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;
                        padding: 3px 8px; border-radius: 4px;
                    ",
                    title: "Ctrl-drag snaps fragment edges when on (N)",
                    onclick: move |e| on_toggle_snap.call(e),
                    "{snap_label}"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background-color: {BG_BASE}; border: 1px solid {BORDER_DEFAULT};
                        color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer;
                        padding: 3px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_toggle_view.call(e),
                    "{view_label}"
                }
            }
        }
    }
}
