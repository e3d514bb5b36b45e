//! UI components grouped by feature domain.

mod title_bar;
mod status_bar;
mod draggable;
mod draggable_demo;

pub use title_bar::{AppView, TitleBar};
pub use status_bar::StatusBar;
pub use draggable_demo::DraggableDemo;
