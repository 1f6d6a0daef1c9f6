//! Director tuning, defaulted from `constants.rs`.

use crate::anchor::{AnchorPoint, Trigger};
use crate::catalog::{self, SubShot};
use crate::constants::*;
use crate::error::{ChoreographyError, Result};
use crate::segment::SegmentKind;
use crate::viewport::SectionId;
use std::time::Duration;

/// Start and end points of one kind of segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: AnchorPoint,
    pub end: AnchorPoint,
}

impl Span {
    pub const fn new(start: AnchorPoint, end: AnchorPoint) -> Self {
        Self { start, end }
    }

    fn is_finite(&self) -> bool {
        [self.start, self.end]
            .iter()
            .all(|p| p.anchor.fraction().is_finite() && p.viewport.fraction().is_finite())
    }
}

/// Anchor points per segment kind. Shots share one push-in and one handoff span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerTable {
    pub hero_hold: Span,
    pub enter: Span,
    pub push_in: Span,
    pub handoff: Span,
    pub footer: Span,
}

impl Default for TriggerTable {
    fn default() -> Self {
        Self {
            hero_hold: Span::new(HERO_HOLD_START, HERO_HOLD_END),
            enter: Span::new(HERO_ENTER_START, HERO_ENTER_END),
            push_in: Span::new(PUSH_IN_START, PUSH_IN_END),
            handoff: Span::new(HANDOFF_START, HANDOFF_END),
            footer: Span::new(FOOTER_START, FOOTER_END),
        }
    }
}

impl TriggerTable {
    pub fn span(&self, kind: SegmentKind) -> Span {
        match kind {
            SegmentKind::HeroHold => self.hero_hold,
            SegmentKind::Enter => self.enter,
            SegmentKind::PushIn(_) => self.push_in,
            SegmentKind::Handoff(_) => self.handoff,
            SegmentKind::Footer => self.footer,
        }
    }

    pub fn trigger(&self, kind: SegmentKind, section: SectionId) -> Trigger {
        let span = self.span(kind);
        Trigger {
            section,
            start: span.start,
            end: span.end,
        }
    }

    fn spans(&self) -> [Span; 5] {
        [
            self.hero_hold,
            self.enter,
            self.push_in,
            self.handoff,
            self.footer,
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectorConfig {
    pub hero: SubShot,
    pub footer: SubShot,
    pub triggers: TriggerTable,
    /// Scrub follower time constant; zero disables smoothing.
    pub scrub_tau_sec: f32,
    pub scrub_snap_px: f32,
    pub caption_shift_px: f32,
    pub resize_debounce: Duration,
    pub ready_timeout: Duration,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            hero: catalog::HERO,
            footer: catalog::FOOTER,
            triggers: TriggerTable::default(),
            scrub_tau_sec: SCRUB_TAU_SEC,
            scrub_snap_px: SCRUB_SNAP_PX,
            caption_shift_px: CAPTION_SHIFT_PX,
            resize_debounce: RESIZE_DEBOUNCE,
            ready_timeout: READY_TIMEOUT,
        }
    }
}

impl DirectorConfig {
    /// Config without scrub smoothing: the camera follows the raw scroll offset.
    pub fn unsmoothed() -> Self {
        Self {
            scrub_tau_sec: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.scrub_tau_sec.is_finite() || self.scrub_tau_sec < 0.0 {
            return Err(ChoreographyError::InvalidConfig(format!(
                "scrub_tau_sec must be finite and >= 0, got {}",
                self.scrub_tau_sec
            )));
        }
        if !self.scrub_snap_px.is_finite() || self.scrub_snap_px < 0.0 {
            return Err(ChoreographyError::InvalidConfig(format!(
                "scrub_snap_px must be finite and >= 0, got {}",
                self.scrub_snap_px
            )));
        }
        if !self.caption_shift_px.is_finite() {
            return Err(ChoreographyError::InvalidConfig(
                "caption_shift_px must be finite".into(),
            ));
        }
        if self.ready_timeout.is_zero() {
            return Err(ChoreographyError::InvalidConfig(
                "ready_timeout must be positive".into(),
            ));
        }
        if !self.triggers.spans().iter().all(Span::is_finite) {
            return Err(ChoreographyError::InvalidConfig(
                "trigger table contains a non-finite edge".into(),
            ));
        }
        let framings = [self.hero, self.footer];
        if !framings
            .iter()
            .all(|s| s.cam.is_finite() && s.look.is_finite())
        {
            return Err(ChoreographyError::InvalidConfig(
                "hero/footer framing is not finite".into(),
            ));
        }
        Ok(())
    }
}
