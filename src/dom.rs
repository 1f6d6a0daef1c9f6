use crate::constants::{MIN_VIEWPORT_HEIGHT, SCROLL_LOCK_OVERFLOW};
use scrollcam_core::{AnchorRect, SectionId, Viewport};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The live page: sections are found by id (`hero`, `shot-<i>`, `footer`).
pub struct DomViewport {
    window: web::Window,
    document: web::Document,
}

impl DomViewport {
    pub fn current() -> Option<Self> {
        let window = web::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f32 {
        self.window.scroll_y().unwrap_or(0.0) as f32
    }

    fn viewport_height(&self) -> f32 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .map_or(MIN_VIEWPORT_HEIGHT, |h| (h as f32).max(MIN_VIEWPORT_HEIGHT))
    }

    fn anchor(&self, section: SectionId) -> Option<AnchorRect> {
        let el = self.document.get_element_by_id(&section.to_string())?;
        let rect = el.get_bounding_client_rect();
        Some(AnchorRect {
            top: (rect.top() as f32) + self.scroll_offset(),
            height: rect.height() as f32,
        })
    }
}

/// Body `overflow` override held while the model loads.
#[derive(Default)]
pub struct ScrollLock {
    previous: Option<String>,
}

impl ScrollLock {
    pub fn engage(&mut self, document: &web::Document) {
        if self.previous.is_some() {
            return;
        }
        if let Some(body) = document.body() {
            let style = body.style();
            let prev = style.get_property_value("overflow").unwrap_or_default();
            _ = style.set_property("overflow", SCROLL_LOCK_OVERFLOW);
            self.previous = Some(prev);
        }
    }

    /// Restore whatever `overflow` the page had before `engage`.
    pub fn release(&mut self, document: &web::Document) {
        let Some(prev) = self.previous.take() else {
            return;
        };
        if let Some(body) = document.body() {
            let style = body.style();
            if prev.is_empty() {
                _ = style.remove_property("overflow");
            } else {
                _ = style.set_property("overflow", &prev);
            }
        }
    }
}
