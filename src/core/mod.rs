pub mod coords;
pub mod viewport;
pub mod timeline_snap;
pub mod drag;
pub mod draggable;
pub mod ruler;
pub mod generator;
