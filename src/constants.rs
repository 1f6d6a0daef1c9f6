// Page wiring for the web frontend.

// Element ids and attributes
pub const OVERLAY_ID: &str = "loading-overlay";
pub const OVERLAY_PROGRESS_ID: &str = "loading-progress";
pub const HIDDEN_CLASS: &str = "hidden";
pub const CAPTION_ATTR: &str = "data-caption"; // value is the section id, e.g. "shot-2"

// Scroll lock applied to <body> while the model loads
pub const SCROLL_LOCK_OVERFLOW: &str = "hidden";

// Viewport
pub const MIN_VIEWPORT_HEIGHT: f32 = 1.0;

// Caption style precision
pub const OPACITY_DECIMALS: usize = 3;
pub const OFFSET_DECIMALS: usize = 1;
