use dioxus::prelude::*;
use std::time::Duration;

use crate::constants::{BG_BASE, TEXT_MUTED};
use crate::core::draggable::{DragUpdate, Pivot, Point};

use super::draggable::DraggableBox;

const BOUND_ROWS: [f64; 3] = [300.0, 380.0, 460.0];
const HORIZONTAL_ROW: f64 = 180.0;

/// Playground for the drag primitive: a free box, one locked to its row, and
/// three that share an x position.
#[component]
pub fn DraggableDemo() -> Element {
    let mut bound_x = use_signal(|| 200.0);
    let mut horizontal_start = use_signal(|| Point::new(200.0, HORIZONTAL_ROW));

    // The owner can move a box after mount by changing its initial position.
    use_future(move || async move {
        tokio::time::sleep(Duration::from_secs(2)).await;
        horizontal_start.set(Point::new(600.0, HORIZONTAL_ROW));
    });

    let lock_row = use_callback(move |update: DragUpdate| Point::new(update.new_position.x, HORIZONTAL_ROW));
    let bind_first = use_callback(move |update: DragUpdate| {
        bound_x.set(update.new_position.x);
        Point::new(update.new_position.x, BOUND_ROWS[0])
    });
    let bind_second = use_callback(move |update: DragUpdate| {
        bound_x.set(update.new_position.x);
        Point::new(update.new_position.x, BOUND_ROWS[1])
    });
    let bind_third = use_callback(move |update: DragUpdate| {
        bound_x.set(update.new_position.x);
        Point::new(update.new_position.x, BOUND_ROWS[2])
    });
    let x = bound_x();

    rsx! {
        div {
            style: "position: relative; flex: 1; overflow: hidden; background-color: {BG_BASE};",
            span {
                style: "position: absolute; left: 16px; top: 12px; font-size: 11px; color: {TEXT_MUTED};",
                "Drag the boxes. The second one stays on its row; the last three move together."
            }
            DraggableBox {
                initial_pos: Point::new(280.0, 100.0),
                pivot: Pivot::Center,
                "Drag me!"
            }
            DraggableBox {
                initial_pos: horizontal_start(),
                on_drag_start: Some(lock_row),
                on_drag: Some(lock_row),
                on_drag_end: Some(lock_row),
                "Horizontal only"
            }
            DraggableBox {
                initial_pos: Point::new(x, BOUND_ROWS[0]),
                on_drag_start: Some(bind_first),
                on_drag: Some(bind_first),
                on_drag_end: Some(bind_first),
                "Bound 1"
            }
            DraggableBox {
                initial_pos: Point::new(x, BOUND_ROWS[1]),
                on_drag_start: Some(bind_second),
                on_drag: Some(bind_second),
                on_drag_end: Some(bind_second),
                "Bound 2"
            }
            DraggableBox {
                initial_pos: Point::new(x, BOUND_ROWS[2]),
                on_drag_start: Some(bind_third),
                on_drag: Some(bind_third),
                on_drag_end: Some(bind_third),
                "Bound 3"
            }
        }
    }
}
