//! Turns the path into a chain of scroll-bound segments.
//!
//! The chain keeps a cursor holding the last end value of every property.
//! A new track always starts where the cursor is, so the end of segment k is
//! the start of segment k+1 for every property they share. Nothing here eases:
//! the scrub follower is the only smoothing applied to camera motion.

use crate::catalog::Shot;
use crate::config::DirectorConfig;
use crate::constants::{CAPTION_HIDDEN, CAPTION_VISIBLE};
use crate::frame::{Framing, ModelPresence};
use crate::path::{self, CaptionMove};
use crate::rig::Targets;
use crate::segment::{Property, Segment, Track, Value};
use crate::viewport::SectionId;
use fnv::FnvHashMap;
use smallvec::SmallVec;

type Ends = SmallVec<[(Property, Value); 5]>;

struct Chain {
    cursor: FnvHashMap<Property, Value>,
    segments: Vec<Segment>,
}

impl Chain {
    fn new(seed: &[(Property, Value)]) -> Self {
        Self {
            cursor: seed.iter().copied().collect(),
            segments: Vec::new(),
        }
    }

    /// Append a segment moving each property from the cursor to its end value.
    fn push(&mut self, mut segment: Segment, ends: Ends) {
        for (property, to) in ends {
            let from = self.cursor.insert(property, to).unwrap_or(to);
            segment.tracks.push(Track { property, from, to });
        }
        self.segments.push(segment);
    }
}

fn camera_ends(framing: &Framing) -> Ends {
    let mut ends = Ends::new();
    ends.push((Property::CameraPosition, Value::Vector(framing.position)));
    ends.push((Property::LookAt, Value::Vector(framing.look_at)));
    if let Some(yaw) = framing.yaw {
        ends.push((Property::ModelYaw, Value::Scalar(yaw)));
    }
    ends
}

fn caption_ends(section: SectionId, pose: (f32, f32)) -> [(Property, Value); 2] {
    [
        (Property::CaptionOpacity(section), Value::Scalar(pose.0)),
        (Property::CaptionOffset(section), Value::Scalar(pose.1)),
    ]
}

/// Values every property holds before any segment has run: the camera on the
/// hero framing, the hero caption shown and every shot caption hidden below.
pub fn initial_values(
    shots: &[Shot],
    model: &ModelPresence,
    config: &DirectorConfig,
) -> Vec<(Property, Value)> {
    let hero = model.resolve(&config.hero);
    let mut values: Vec<(Property, Value)> = camera_ends(&hero).into_iter().collect();
    values.extend(caption_ends(SectionId::Hero, (CAPTION_VISIBLE, 0.0)));
    for i in 0..shots.len() {
        values.extend(caption_ends(
            SectionId::Shot(i),
            (CAPTION_HIDDEN, config.caption_shift_px),
        ));
    }
    values
}

/// Write the initial values into `targets`.
pub fn seed_targets(
    targets: &mut Targets,
    shots: &[Shot],
    model: &ModelPresence,
    config: &DirectorConfig,
) {
    targets.model_yaw = None;
    targets.captions.clear();
    for (property, value) in initial_values(shots, model, config) {
        property.write(value, targets);
    }
}

/// Build the full ordered segment chain. Regions are left unmeasured.
pub fn build(shots: &[Shot], model: &ModelPresence, config: &DirectorConfig) -> Vec<Segment> {
    let mut chain = Chain::new(&initial_values(shots, model, config));
    for leg in path::legs(shots, config.hero, config.footer) {
        let mut ends = Ends::new();
        if let Some((from, to)) = leg.camera {
            let to = model.resolve(&to);
            debug_assert_eq!(
                chain.cursor.get(&Property::CameraPosition),
                Some(&Value::Vector(model.resolve(&from).position)),
                "{} does not start where the chain is",
                leg.kind
            );
            ends.extend(camera_ends(&to));
        }
        match leg.caption {
            Some(CaptionMove::In) => ends.extend(caption_ends(leg.section, (CAPTION_VISIBLE, 0.0))),
            Some(CaptionMove::Out) => ends.extend(caption_ends(
                leg.section,
                (CAPTION_HIDDEN, -config.caption_shift_px),
            )),
            None => {}
        }
        let trigger = config.triggers.trigger(leg.kind, leg.section);
        chain.push(Segment::new(leg.kind, trigger), ends);
    }
    log::debug!(
        "[choreography] built {} segments for {} shots (model {})",
        chain.segments.len(),
        shots.len(),
        if model.is_present() { "present" } else { "absent" }
    );
    chain.segments
}
