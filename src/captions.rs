use crate::style;
use scrollcam_core::{CaptionPose, SectionId, Targets};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Copies caption poses onto `[data-caption]` elements, skipping unchanged ones.
#[derive(Default)]
pub struct CaptionWriter {
    written: Vec<(SectionId, CaptionPose)>,
}

impl CaptionWriter {
    pub fn write(&mut self, document: &web::Document, targets: &Targets) {
        for (&section, &pose) in &targets.captions {
            let slot = self.written.iter_mut().find(|(s, _)| *s == section);
            if matches!(&slot, Some((_, p)) if *p == pose) {
                continue;
            }
            if !apply(document, section, &pose) {
                continue;
            }
            match slot {
                Some(entry) => entry.1 = pose,
                None => self.written.push((section, pose)),
            }
        }
    }
}

fn apply(document: &web::Document, section: SectionId, pose: &CaptionPose) -> bool {
    let Ok(Some(el)) = document.query_selector(&style::caption_selector(section)) else {
        return false;
    };
    let Some(el) = el.dyn_ref::<web::HtmlElement>() else {
        return false;
    };
    let css = el.style();
    _ = css.set_property("opacity", &style::caption_opacity(pose));
    _ = css.set_property("transform", &style::caption_transform(pose));
    _ = css.set_property("pointer-events", style::caption_pointer_events(pose));
    true
}
