use crate::anchor::{AnchorPoint, Edge};
use std::time::Duration;

// Shared choreography tuning constants used by the director and the web frontend.

// Model frame
pub const MIN_MODEL_RADIUS: f32 = 1e-3; // floor applied to the measured bounding radius

// Scrub smoothing (the only temporal smoothing applied to camera motion)
pub const SCRUB_TAU_SEC: f32 = 0.35; // time constant of the scroll-offset follower
pub const SCRUB_SNAP_PX: f32 = 0.5; // closer than this and the follower snaps to target
pub const SCRUB_MAX_DT_SEC: f32 = 0.1; // a long stall advances the follower by one capped frame

// Captions
pub const CAPTION_SHIFT_PX: f32 = 40.0; // vertical travel of a caption while fading
pub const CAPTION_VISIBLE: f32 = 1.0;
pub const CAPTION_HIDDEN: f32 = 0.0;

// Lifecycle
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);
pub const READY_TIMEOUT: Duration = Duration::from_secs(12); // overlay is dismissed even if the model never arrives

// Load progress fallback when the asset size is unknown
pub const PROGRESS_FALLBACK_STEP: u8 = 3; // percent per progress event
pub const PROGRESS_FALLBACK_CEILING: u8 = 95; // never claim completion before the terminal event

// Default trigger table: (anchor edge, viewport edge) pairs
pub const HERO_HOLD_START: AnchorPoint = AnchorPoint::new(Edge::TOP, Edge::TOP);
pub const HERO_HOLD_END: AnchorPoint = AnchorPoint::new(Edge::at(0.25), Edge::TOP);
pub const HERO_ENTER_START: AnchorPoint = HERO_HOLD_END;
pub const HERO_ENTER_END: AnchorPoint = AnchorPoint::new(Edge::BOTTOM, Edge::CENTER);
pub const PUSH_IN_START: AnchorPoint = AnchorPoint::new(Edge::TOP, Edge::CENTER);
pub const PUSH_IN_END: AnchorPoint = AnchorPoint::new(Edge::CENTER, Edge::CENTER);
pub const HANDOFF_START: AnchorPoint = PUSH_IN_END;
pub const HANDOFF_END: AnchorPoint = AnchorPoint::new(Edge::BOTTOM, Edge::CENTER);
pub const FOOTER_START: AnchorPoint = AnchorPoint::new(Edge::TOP, Edge::CENTER);
pub const FOOTER_END: AnchorPoint = AnchorPoint::new(Edge::BOTTOM, Edge::BOTTOM);
