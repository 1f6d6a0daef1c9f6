// Host-side tests for the page formatting helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use scrollcam_core::{CaptionPose, SectionId};
use style::*;

#[test]
fn caption_selector_matches_section_ids() {
    assert_eq!(caption_selector(SectionId::Hero), "[data-caption=\"hero\"]");
    assert_eq!(caption_selector(SectionId::Shot(2)), "[data-caption=\"shot-2\"]");
    assert_eq!(caption_selector(SectionId::Footer), "[data-caption=\"footer\"]");
}

#[test]
fn caption_styles_are_formatted_with_fixed_precision() {
    let pose = CaptionPose {
        opacity: 0.5,
        offset_px: -12.34,
    };
    assert_eq!(caption_opacity(&pose), "0.500");
    assert_eq!(caption_transform(&pose), "translate3d(0, -12.3px, 0)");
    assert_eq!(caption_pointer_events(&pose), "auto");
}

#[test]
fn hidden_caption_ignores_pointer_and_opacity_is_clamped() {
    let hidden = CaptionPose {
        opacity: -0.2,
        offset_px: 40.0,
    };
    assert_eq!(caption_opacity(&hidden), "0.000");
    assert_eq!(caption_pointer_events(&hidden), "none");

    let over = CaptionPose {
        opacity: 1.7,
        offset_px: 0.0,
    };
    assert_eq!(caption_opacity(&over), "1.000");
}

#[test]
fn progress_label_caps_at_hundred() {
    assert_eq!(progress_label(0), "0%");
    assert_eq!(progress_label(42), "42%");
    assert_eq!(progress_label(250), "100%");
}

#[test]
fn unknown_totals_are_none() {
    assert_eq!(progress_total(None), None);
    assert_eq!(progress_total(Some(0.0)), None);
    assert_eq!(progress_total(Some(-10.0)), None);
    assert_eq!(progress_total(Some(f64::NAN)), None);
    assert_eq!(progress_total(Some(f64::INFINITY)), None);
    assert_eq!(progress_total(Some(2048.0)), Some(2048));
}

#[test]
fn loaded_bytes_are_non_negative() {
    assert_eq!(progress_loaded(-5.0), 0);
    assert_eq!(progress_loaded(f64::NAN), 0);
    assert_eq!(progress_loaded(1536.9), 1536);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_sane() {
    assert!(MIN_VIEWPORT_HEIGHT > 0.0);
    assert_ne!(OVERLAY_ID, OVERLAY_PROGRESS_ID);
    assert!(!CAPTION_ATTR.is_empty());
}
