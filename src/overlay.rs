use crate::constants::{HIDDEN_CLASS, OVERLAY_ID, OVERLAY_PROGRESS_ID};
use crate::style;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Write the load percentage into the overlay's progress element.
pub fn set_progress(document: &web::Document, percent: u8) {
    if let Some(el) = document.get_element_by_id(OVERLAY_PROGRESS_ID) {
        el.set_text_content(Some(&style::progress_label(percent)));
        _ = el.set_attribute("aria-valuenow", &percent.min(100).to_string());
    }
}
