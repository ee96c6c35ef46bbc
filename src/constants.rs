// Page wiring and drawing constants for the web frontend.

// DOM
pub const CANVAS_ID: &str = "globe-canvas";
pub const FALLBACK_ID: &str = "globe-fallback";

// Frame loop
// Longest delta handed to the animator; a background tab resumes without a jump.
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25;

// Drawing
pub const WIREFRAME_LINE_WIDTH_CSS: f64 = 1.0; // scaled by devicePixelRatio
pub const LABEL_FONT_FAMILY: &str = "system-ui, sans-serif";
pub const LABEL_MIN_FONT_PX: f32 = 6.0; // below this labels turn to mush

// Fallback placeholder
pub const FALLBACK_TEXT: &str = "Interactive 3D Globe<br/>Loading...";
pub const FALLBACK_STYLE: &str = "width: 300px; height: 300px; \
    background: linear-gradient(45deg, #ff0000, #ff6b6b); border-radius: 50%; \
    display: flex; align-items: center; justify-content: center; color: white; \
    font-size: 16px; text-align: center; padding: 20px; box-sizing: border-box;";
