//! The page as seen by the choreography: sections, their boxes and the scroll offset.

use std::fmt;

/// A structural page section. Anchors and captions are keyed by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Hero,
    Shot(usize),
    Footer,
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hero => write!(f, "hero"),
            Self::Shot(i) => write!(f, "shot-{i}"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// Vertical extent of an anchor element in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AnchorRect {
    pub top: f32,
    pub height: f32,
}

/// Source of scroll offset, viewport size and anchor geometry.
pub trait Viewport {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f32;
    fn viewport_height(&self) -> f32;
    /// Box of the section's anchor element, `None` when it is not on the page.
    fn anchor(&self, section: SectionId) -> Option<AnchorRect>;
}

/// Viewport over a fixed column of sections, each `section_height` tall,
/// stacked hero, shots, footer with no gaps.
///
/// Used by tests and by hosts that lay sections out themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedViewport {
    pub shot_count: usize,
    pub section_height: f32,
    pub footer_height: f32,
    pub viewport_height: f32,
    pub scroll: f32,
}

impl StackedViewport {
    pub fn new(shot_count: usize, viewport_height: f32) -> Self {
        Self {
            shot_count,
            section_height: viewport_height,
            footer_height: viewport_height,
            viewport_height,
            scroll: 0.0,
        }
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        let doc = self.section_height * (self.shot_count + 1) as f32 + self.footer_height;
        (doc - self.viewport_height).max(0.0)
    }
}

impl Viewport for StackedViewport {
    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn anchor(&self, section: SectionId) -> Option<AnchorRect> {
        let h = self.section_height;
        match section {
            SectionId::Hero => Some(AnchorRect { top: 0.0, height: h }),
            SectionId::Shot(i) if i < self.shot_count => Some(AnchorRect {
                top: h * (i + 1) as f32,
                height: h,
            }),
            SectionId::Shot(_) => None,
            SectionId::Footer => Some(AnchorRect {
                top: h * (self.shot_count + 1) as f32,
                height: self.footer_height,
            }),
        }
    }
}
