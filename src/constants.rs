/// Shell-side constants: element ids, drawing style and canvas policy.
///
/// Physics and audio tuning lives in `core::constants`.
// DOM ids
pub const CANVAS_ID: &str = "rope-canvas";
pub const WINDOW_ID: &str = "rope-window";

// Rope drawing
pub const ROPE_COLOR: &str = "#cfe7ff";
pub const ROPE_WIDTH_PX: f64 = 3.0;
pub const HANDLE_COLOR: &str = "#ff7a59";
pub const HANDLE_RADIUS_PX: f64 = 14.0;

// Hover sizing variant: CSS transition applied to the host box
pub const HOVER_TRANSITION_CSS: &str = "width 0.4s ease, height 0.4s ease";

// Lowpass resonance
pub const FILTER_Q: f32 = 4.0;
