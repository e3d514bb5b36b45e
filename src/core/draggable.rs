//! Generic 2-D drag primitive.
//!
//! Tracks where an element sits while the pointer drags it and lets callers
//! override the computed position per phase (lock an axis, mirror another
//! element, ...). Without hooks the element simply follows the pointer.

use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which point of the element its position refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pivot {
    #[default]
    TopLeft,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Start,
    Drag,
    End,
}

/// Passed to hooks: the phase, the pointer, and the position the drag would
/// move the element to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub phase: DragPhase,
    pub cursor: Point,
    pub new_position: Point,
}

/// Returns the position to use instead of `new_position`.
pub type DragHook = Rc<dyn Fn(&DragUpdate) -> Point>;

/// Optional override per drag phase. A missing hook keeps the computed position.
#[derive(Clone, Default)]
pub struct DragHooks {
    pub on_drag_start: Option<DragHook>,
    pub on_drag: Option<DragHook>,
    pub on_drag_end: Option<DragHook>,
}

impl DragHooks {
    /// Use the same hook for every phase.
    pub fn all(hook: DragHook) -> Self {
        Self {
            on_drag_start: Some(hook.clone()),
            on_drag: Some(hook.clone()),
            on_drag_end: Some(hook),
        }
    }

    fn apply(&self, update: DragUpdate) -> Point {
        let hook = match update.phase {
            DragPhase::Start => &self.on_drag_start,
            DragPhase::Drag => &self.on_drag,
            DragPhase::End => &self.on_drag_end,
        };
        match hook {
            Some(hook) => hook(&update),
            None => update.new_position,
        }
    }
}

impl fmt::Debug for DragHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragHooks")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    cursor: Point,
    element: Point,
}

#[derive(Clone, Debug)]
pub struct Draggable {
    position: Point,
    pivot: Pivot,
    size: Point,
    hooks: DragHooks,
    anchor: Option<DragAnchor>,
}

impl Draggable {
    /// `size` is the element's width/height, used by the center pivot.
    pub fn new(position: Point, pivot: Pivot, size: Point) -> Self {
        Self {
            position,
            pivot,
            size,
            hooks: DragHooks::default(),
            anchor: None,
        }
    }

    pub fn with_hooks(mut self, hooks: DragHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Current position of the pivot point.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Move without dragging, e.g. when the owner changes the initial position.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    fn pivot_offset(&self) -> Point {
        match self.pivot {
            Pivot::TopLeft => Point::default(),
            Pivot::Center => Point::new(self.size.x / 2.0, self.size.y / 2.0),
        }
    }

    /// Where the element's top-left corner is drawn.
    pub fn top_left(&self) -> Point {
        let offset = self.pivot_offset();
        Point::new(self.position.x - offset.x, self.position.y - offset.y)
    }

    fn follow(&mut self, phase: DragPhase, anchor: DragAnchor, cursor: Point) -> Point {
        let new_position = Point::new(
            anchor.element.x + (cursor.x - anchor.cursor.x),
            anchor.element.y + (cursor.y - anchor.cursor.y),
        );
        let resolved = self.hooks.apply(DragUpdate {
            phase,
            cursor,
            new_position,
        });
        self.position = resolved;
        resolved
    }

    pub fn start(&mut self, cursor: Point) -> Point {
        let anchor = DragAnchor {
            cursor,
            element: self.position,
        };
        self.anchor = Some(anchor);
        self.follow(DragPhase::Start, anchor, cursor)
    }

    /// Follow the pointer; (0, 0) samples are dropped.
    pub fn drag(&mut self, cursor: Point) -> Option<Point> {
        let anchor = self.anchor?;
        if cursor.x == 0.0 && cursor.y == 0.0 {
            return None;
        }
        Some(self.follow(DragPhase::Drag, anchor, cursor))
    }

    pub fn end(&mut self, cursor: Point) -> Option<Point> {
        let anchor = self.anchor.take()?;
        Some(self.follow(DragPhase::End, anchor, cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_follows_pointer_without_hooks() {
        let mut draggable = Draggable::new(Point::new(200.0, 300.0), Pivot::TopLeft, Point::new(80.0, 40.0));
        draggable.start(Point::new(210.0, 310.0));
        assert_eq!(draggable.drag(Point::new(260.0, 290.0)), Some(Point::new(250.0, 280.0)));
        assert_eq!(draggable.end(Point::new(270.0, 300.0)), Some(Point::new(260.0, 290.0)));
        assert!(!draggable.is_dragging());
        assert_eq!(draggable.drag(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_center_pivot_offsets_top_left() {
        let draggable = Draggable::new(Point::new(100.0, 100.0), Pivot::Center, Point::new(80.0, 40.0));
        assert_eq!(draggable.top_left(), Point::new(60.0, 80.0));
    }

    #[test]
    fn test_hook_locks_vertical_axis() {
        let lock_y: DragHook = Rc::new(|update: &DragUpdate| Point::new(update.new_position.x, 500.0));
        let mut draggable = Draggable::new(Point::new(200.0, 500.0), Pivot::TopLeft, Point::default())
            .with_hooks(DragHooks::all(lock_y));
        draggable.start(Point::new(200.0, 500.0));
        assert_eq!(draggable.drag(Point::new(240.0, 650.0)), Some(Point::new(240.0, 500.0)));
    }

    #[test]
    fn test_hooks_run_per_phase() {
        let phases = Rc::new(Cell::new(0_u32));
        let seen = phases.clone();
        let hooks = DragHooks {
            on_drag: Some(Rc::new(move |update: &DragUpdate| {
                seen.set(seen.get() + 1);
                update.new_position
            })),
            ..Default::default()
        };
        let mut draggable = Draggable::new(Point::default(), Pivot::TopLeft, Point::default()).with_hooks(hooks);
        draggable.start(Point::new(1.0, 1.0));
        draggable.drag(Point::new(2.0, 2.0));
        draggable.drag(Point::new(3.0, 3.0));
        draggable.end(Point::new(3.0, 3.0));
        assert_eq!(phases.get(), 2);
    }

    #[test]
    fn test_zero_sample_is_ignored() {
        let mut draggable = Draggable::new(Point::new(10.0, 10.0), Pivot::TopLeft, Point::default());
        draggable.start(Point::new(50.0, 50.0));
        draggable.drag(Point::new(60.0, 55.0));
        assert_eq!(draggable.drag(Point::new(0.0, 0.0)), None);
        assert_eq!(draggable.position(), Point::new(20.0, 15.0));
    }
}
