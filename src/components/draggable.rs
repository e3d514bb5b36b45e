use dioxus::prelude::*;
use std::rc::Rc;

use crate::constants::{BG_SURFACE, BORDER_ACCENT, BORDER_STRONG, TEXT_PRIMARY};
use crate::core::draggable::{DragHook, DragHooks, DragUpdate, Draggable, Pivot, Point};

fn hook_from(callback: Callback<DragUpdate, Point>) -> DragHook {
    Rc::new(move |update: &DragUpdate| callback.call(*update))
}

/// Absolutely positioned box that follows the pointer. Each hook may return a
/// different position than the one the drag computed.
#[component]
pub fn DraggableBox(
    initial_pos: Point,
    #[props(default)] pivot: Pivot,
    #[props(default = Point::new(150.0, 44.0))] size: Point,
    #[props(default)] on_drag_start: Option<Callback<DragUpdate, Point>>,
    #[props(default)] on_drag: Option<Callback<DragUpdate, Point>>,
    #[props(default)] on_drag_end: Option<Callback<DragUpdate, Point>>,
    children: Element,
) -> Element {
    let mut draggable = use_signal(|| {
        let hooks = DragHooks {
            on_drag_start: on_drag_start.map(hook_from),
            on_drag: on_drag.map(hook_from),
            on_drag_end: on_drag_end.map(hook_from),
        };
        Draggable::new(initial_pos, pivot, size).with_hooks(hooks)
    });

    // A new initial position from the owner moves the box.
    use_effect(use_reactive((&initial_pos,), move |(initial_pos,)| {
        draggable.write().set_position(initial_pos);
    }));

    let top_left = draggable.read().top_left();
    let (left, top) = (top_left.x, top_left.y);
    let (width, height) = (size.x, size.y);
    let is_dragging = draggable.read().is_dragging();
    let border = if is_dragging { BORDER_ACCENT } else { BORDER_STRONG };

    rsx! {
        div {
            style: "
                position: absolute; left: {left}px; top: {top}px;
                width: {width}px; height: {height}px; box-sizing: border-box;
                display: flex; align-items: center; justify-content: center;
                background-color: {BG_SURFACE}; border: 1px solid {border}; border-radius: 6px;
                color: {TEXT_PRIMARY}; font-size: 12px; cursor: grab; user-select: none;
            ",
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        let coords = e.client_coordinates();
                        draggable.write().start(Point::new(coords.x, coords.y));
                    }
                }
            },
            {children}
        }

        if is_dragging {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: grabbing;",
                onmousemove: move |e| {
                    let coords = e.client_coordinates();
                    draggable.write().drag(Point::new(coords.x, coords.y));
                },
                onmouseup: move |e| {
                    let coords = e.client_coordinates();
                    draggable.write().end(Point::new(coords.x, coords.y));
                },
                onmouseleave: move |e| {
                    let coords = e.client_coordinates();
                    draggable.write().end(Point::new(coords.x, coords.y));
                },
            }
        }
    }
}
