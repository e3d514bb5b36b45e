//! Hotkey system
//!
//! Centralized hotkey management for the timeline editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Viewport
    // ═══════════════════════════════════════════════════════════════
    /// Show fewer seconds across the timeline
    TimelineZoomIn,
    /// Show more seconds across the timeline
    TimelineZoomOut,
    /// Scroll the visible window towards earlier times
    TimelinePanLeft,
    /// Scroll the visible window towards later times
    TimelinePanRight,

    // ═══════════════════════════════════════════════════════════════
    // Document
    // ═══════════════════════════════════════════════════════════════
    /// Write the timeline to a JSON file.
    ExportTimeline,
    /// Replace the timeline with one read from a JSON file.
    ImportTimeline,
    /// Turn ctrl-drag snapping on or off.
    ToggleSnapping,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether the timeline view is the one on screen
    pub timeline_visible: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// # Returns
/// * `HotkeyResult::Action(action)` if a hotkey matched
/// * `HotkeyResult::NoMatch` if no binding exists
/// * `HotkeyResult::Suppressed` if input is focused
pub fn handle_hotkey(
    key: &Key,
    ctrl: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    // ═══════════════════════════════════════════════════════════════
    // Global Hotkeys (work regardless of context)
    // ═══════════════════════════════════════════════════════════════
    let command = ctrl || meta;
    match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("s") => {
            return HotkeyResult::Action(HotkeyAction::ExportTimeline);
        }
        Key::Character(c) if command && c.eq_ignore_ascii_case("o") => {
            return HotkeyResult::Action(HotkeyAction::ImportTimeline);
        }
        _ => {}
    }

    // ═══════════════════════════════════════════════════════════════
    // Timeline Hotkeys
    // ═══════════════════════════════════════════════════════════════
    if !context.timeline_visible {
        return HotkeyResult::NoMatch;
    }

    match key {
        Key::Character(c) if c == "+" || c == "=" => HotkeyResult::Action(HotkeyAction::TimelineZoomIn),
        Key::Character(c) if c == "-" => HotkeyResult::Action(HotkeyAction::TimelineZoomOut),
        Key::Character(c) if !command && c.eq_ignore_ascii_case("n") => {
            HotkeyResult::Action(HotkeyAction::ToggleSnapping)
        }
        Key::ArrowLeft => HotkeyResult::Action(HotkeyAction::TimelinePanLeft),
        Key::ArrowRight => HotkeyResult::Action(HotkeyAction::TimelinePanRight),
        _ => HotkeyResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_ctx() -> HotkeyContext {
        HotkeyContext {
            timeline_visible: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_plus_zooms_in() {
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, &timeline_ctx());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn)));
    }

    #[test]
    fn test_minus_zooms_out() {
        let result = handle_hotkey(&Key::Character("-".to_string()), false, false, &timeline_ctx());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut)));
    }

    #[test]
    fn test_arrows_pan() {
        let left = handle_hotkey(&Key::ArrowLeft, false, false, &timeline_ctx());
        let right = handle_hotkey(&Key::ArrowRight, false, false, &timeline_ctx());
        assert!(matches!(left, HotkeyResult::Action(HotkeyAction::TimelinePanLeft)));
        assert!(matches!(right, HotkeyResult::Action(HotkeyAction::TimelinePanRight)));
    }

    #[test]
    fn test_ctrl_s_exports_anywhere() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("S".to_string()), true, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ExportTimeline)));
    }

    #[test]
    fn test_cmd_o_imports() {
        let result = handle_hotkey(&Key::Character("o".to_string()), false, true, &timeline_ctx());
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::ImportTimeline)));
    }

    #[test]
    fn test_timeline_keys_need_visible_timeline() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, &ctx);
        assert!(matches!(result, HotkeyResult::NoMatch));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            timeline_visible: true,
            input_focused: true,
        };
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
