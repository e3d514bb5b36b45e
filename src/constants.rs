//! Shared UI constants such as colors, timeline sizing, and scripts.

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_AUDIO: &str = "#3b82f6";
pub const ACCENT_GESTURE: &str = "#a855f7";
pub const ACCENT_CAMERA: &str = "#f97316";
pub const ACCENT_CLOTHES: &str = "#ec4899";
pub const ACCENT_BACKGROUND: &str = "#22c55e";
pub const ACCENT_UNKNOWN: &str = "#71717a";
pub const ACCENT_TEXT: &str = "#eab308";

pub const TIMELINE_ROW_HEIGHT: f64 = 36.0;
pub const TIMELINE_RULER_HEIGHT: f64 = 28.0;
pub const TIMELINE_LABEL_WIDTH: f64 = 140.0;
/// Seconds visible on first show.
pub const TIMELINE_DEFAULT_SCALE_SECONDS: f64 = 60.0;
pub const TIMELINE_MIN_SCALE_SECONDS: f64 = 1.0;
pub const TIMELINE_MAX_SCALE_SECONDS: f64 = 3600.0;
/// Pixels the viewport moves per wheel notch.
pub const TIMELINE_WHEEL_STEP_PX: f64 = 10.0;
pub const TIMELINE_SNAP_THRESHOLD_PX: f64 = 30.0;

pub const RULER_MAJOR_STEP_SECONDS: f64 = 10.0;
pub const RULER_MINOR_STEPS: u32 = 10;

pub const DEFAULT_FRAGMENTS_PER_ROW: usize = 4;
pub const GENERATED_START_SPREAD_SECONDS: f64 = 120.0;
pub const GENERATED_MAX_LENGTH_SECONDS: f64 = 60.0;

/// Reports the tracks host bounds as `{ left, width }` whenever they change:
/// on resize, on layout mutations, on scroll, and when the pointer enters the
/// host so `left` is fresh before the first wheel over it.
pub const TIMELINE_VIEWPORT_SCRIPT: &str = r#"
const hostId = "timeline-tracks-host";
let last = null;

function sendBounds() {
    const host = document.getElementById(hostId);
    if (!host) {
        return;
    }
    const rect = host.getBoundingClientRect();
    const next = { left: rect.left, width: rect.width };
    if (last &&
        Math.abs(last.left - next.left) < 0.5 &&
        Math.abs(last.width - next.width) < 0.5) {
        return;
    }
    last = next;
    dioxus.send(next);
}

function attach() {
    const host = document.getElementById(hostId);
    if (!host) {
        setTimeout(attach, 100);
        return;
    }
    const observer = new ResizeObserver(() => sendBounds());
    observer.observe(host);
    const layout = new MutationObserver(() => sendBounds());
    layout.observe(document.body, { childList: true, subtree: true, attributes: true, attributeFilter: ["style", "class"] });
    window.addEventListener("resize", sendBounds, { passive: true });
    window.addEventListener("scroll", sendBounds, { passive: true, capture: true });
    host.addEventListener("pointerenter", sendBounds, { passive: true });
    sendBounds();
}

attach();
await new Promise(() => {});
"#;
