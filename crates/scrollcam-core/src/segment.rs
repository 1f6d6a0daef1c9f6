//! Scroll-bound interpolation units.

use crate::anchor::{Region, Trigger};
use crate::rig::Targets;
use crate::viewport::SectionId;
use glam::Vec3;
use smallvec::SmallVec;
use std::fmt;

/// An animated property. Each one has a single writer per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    CameraPosition,
    LookAt,
    ModelYaw,
    CaptionOpacity(SectionId),
    CaptionOffset(SectionId),
}

/// A property value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f32),
    Vector(Vec3),
}

impl Value {
    /// Linear interpolation. Endpoints are returned exactly; mismatched
    /// kinds never interpolate and yield `self`.
    pub fn lerp(self, to: Value, t: f32) -> Value {
        if t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return to;
        }
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Value::Scalar(a + (b - a) * t),
            (Value::Vector(a), Value::Vector(b)) => Value::Vector(a.lerp(b, t)),
            (from, _) => {
                debug_assert!(false, "lerp between mismatched value kinds");
                from
            }
        }
    }
}

impl Property {
    /// Write `value` into the matching slot of `targets`.
    pub fn write(self, value: Value, targets: &mut Targets) {
        match (self, value) {
            (Property::CameraPosition, Value::Vector(v)) => targets.rig.set_position(v),
            (Property::LookAt, Value::Vector(v)) => targets.rig.set_look_at(v),
            (Property::ModelYaw, Value::Scalar(v)) => targets.model_yaw = Some(v),
            (Property::CaptionOpacity(section), Value::Scalar(v)) => {
                targets.caption_mut(section).opacity = v
            }
            (Property::CaptionOffset(section), Value::Scalar(v)) => {
                targets.caption_mut(section).offset_px = v
            }
            (property, value) => {
                log::warn!("[segment] {property:?} cannot take {value:?}");
            }
        }
    }
}

/// One animated property with its start and end targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub property: Property,
    pub from: Value,
    pub to: Value,
}

impl Track {
    #[inline]
    pub fn sample(&self, t: f32) -> Value {
        self.from.lerp(self.to, t)
    }
}

/// Where in the path a segment sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    HeroHold,
    /// Hero wide to the first shot's wide.
    Enter,
    PushIn(usize),
    Handoff(usize),
    Footer,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeroHold => write!(f, "hero-hold"),
            Self::Enter => write!(f, "enter"),
            Self::PushIn(i) => write!(f, "push-in[{i}]"),
            Self::Handoff(i) => write!(f, "handoff[{i}]"),
            Self::Footer => write!(f, "footer"),
        }
    }
}

/// Handle returned by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub(crate) u32);

/// A trigger and the tracks it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub trigger: Trigger,
    pub tracks: SmallVec<[Track; 5]>,
    pub(crate) region: Region,
}

impl Segment {
    pub fn new(kind: SegmentKind, trigger: Trigger) -> Self {
        Self {
            kind,
            trigger,
            tracks: SmallVec::new(),
            region: Region::default(),
        }
    }

    pub fn section(&self) -> SectionId {
        self.trigger.section
    }

    /// Last measured scroll interval.
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn track(&self, property: Property) -> Option<&Track> {
        self.tracks.iter().find(|t| t.property == property)
    }

    pub fn drives(&self, property: Property) -> bool {
        self.track(property).is_some()
    }

    pub fn start_of(&self, property: Property) -> Option<Value> {
        self.track(property).map(|t| t.from)
    }

    pub fn end_of(&self, property: Property) -> Option<Value> {
        self.track(property).map(|t| t.to)
    }

    /// Every property's value at progress `t`.
    pub fn sample(&self, t: f32) -> impl Iterator<Item = (Property, Value)> + '_ {
        self.tracks.iter().map(move |track| (track.property, track.sample(t)))
    }

    /// Pull-based progress of this segment for a scroll offset.
    pub fn progress(&self, scroll: f32) -> f32 {
        self.region.progress(scroll)
    }
}
