//! Viewport-relative trigger points and the scroll regions they measure to.

use crate::error::ChoreographyError;
use crate::viewport::{AnchorRect, SectionId};
use std::fmt;
use std::str::FromStr;

/// A fractional position along an element or the viewport, 0 = top, 1 = bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge(f32);

impl Edge {
    pub const TOP: Edge = Edge(0.0);
    pub const CENTER: Edge = Edge(0.5);
    pub const BOTTOM: Edge = Edge(1.0);

    /// Edge at `fraction` of the height, e.g. `0.25` for `"25%"`.
    pub const fn at(fraction: f32) -> Self {
        Edge(fraction)
    }

    pub fn fraction(self) -> f32 {
        self.0
    }
}

impl FromStr for Edge {
    type Err = ChoreographyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::TOP),
            "center" => Ok(Self::CENTER),
            "bottom" => Ok(Self::BOTTOM),
            _ => s
                .strip_suffix('%')
                .and_then(|pct| pct.parse::<f32>().ok())
                .filter(|pct| pct.is_finite())
                .map(|pct| Edge(pct / 100.0))
                .ok_or_else(|| ChoreographyError::InvalidAnchorPoint(s.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            x if x == 0.0 => write!(f, "top"),
            x if x == 0.5 => write!(f, "center"),
            x if x == 1.0 => write!(f, "bottom"),
            x => write!(f, "{}%", x * 100.0),
        }
    }
}

/// "When `anchor` edge of the element meets `viewport` edge of the screen".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPoint {
    pub anchor: Edge,
    pub viewport: Edge,
}

impl AnchorPoint {
    pub const fn new(anchor: Edge, viewport: Edge) -> Self {
        Self { anchor, viewport }
    }

    /// Scroll offset at which this point is reached.
    pub fn scroll_at(&self, rect: AnchorRect, viewport_height: f32) -> f32 {
        rect.top + self.anchor.fraction() * rect.height - self.viewport.fraction() * viewport_height
    }
}

impl FromStr for AnchorPoint {
    type Err = ChoreographyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(anchor), Some(viewport), None) => Ok(Self {
                anchor: anchor
                    .parse()
                    .map_err(|_| ChoreographyError::InvalidAnchorPoint(s.to_string()))?,
                viewport: viewport
                    .parse()
                    .map_err(|_| ChoreographyError::InvalidAnchorPoint(s.to_string()))?,
            }),
            _ => Err(ChoreographyError::InvalidAnchorPoint(s.to_string())),
        }
    }
}

impl fmt::Display for AnchorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.anchor, self.viewport)
    }
}

/// Section plus the start and end points bounding a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trigger {
    pub section: SectionId,
    pub start: AnchorPoint,
    pub end: AnchorPoint,
}

/// Measured scroll interval of a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Region {
    pub start: f32,
    pub end: f32,
}

impl Region {
    pub fn measure(trigger: &Trigger, rect: AnchorRect, viewport_height: f32) -> Self {
        Self {
            start: trigger.start.scroll_at(rect, viewport_height),
            end: trigger.end.scroll_at(rect, viewport_height),
        }
    }

    /// Normalized progress of `scroll` through the region, clamped to [0, 1].
    ///
    /// A zero-length region is a step at its end offset.
    pub fn progress(&self, scroll: f32) -> f32 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / span).clamp(0.0, 1.0)
    }
}
