// Pure formatting helpers shared by the caption writer and the overlay.

use crate::constants::{CAPTION_ATTR, OFFSET_DECIMALS, OPACITY_DECIMALS};
use scrollcam_core::{CaptionPose, SectionId};

/// CSS selector of a section's caption element.
pub fn caption_selector(section: SectionId) -> String {
    format!("[{CAPTION_ATTR}=\"{section}\"]")
}

#[inline]
pub fn caption_opacity(pose: &CaptionPose) -> String {
    format!("{:.*}", OPACITY_DECIMALS, pose.opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn caption_transform(pose: &CaptionPose) -> String {
    format!("translate3d(0, {:.*}px, 0)", OFFSET_DECIMALS, pose.offset_px)
}

/// Captions that are fully transparent also stop taking pointer events.
#[inline]
pub fn caption_pointer_events(pose: &CaptionPose) -> &'static str {
    if pose.opacity <= 0.0 {
        "none"
    } else {
        "auto"
    }
}

pub fn progress_label(percent: u8) -> String {
    format!("{}%", percent.min(100))
}

/// Interpret the `total` argument of a JS progress callback.
///
/// `undefined`, zero, negative and non-finite totals all mean "unknown".
pub fn progress_total(total: Option<f64>) -> Option<u64> {
    total
        .filter(|t| t.is_finite() && *t > 0.0)
        .map(|t| t as u64)
}

/// Loaded byte count from JS, clamped to a non-negative integer.
pub fn progress_loaded(loaded: f64) -> u64 {
    if loaded.is_finite() && loaded > 0.0 {
        loaded as u64
    } else {
        0
    }
}
