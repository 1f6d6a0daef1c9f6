//! Explicit owner of every installed segment.

use crate::anchor::Region;
use crate::rig::Targets;
use crate::segment::{Property, Segment, SegmentId};
use crate::viewport::{SectionId, Viewport};
use fnv::FnvHashMap;
use std::collections::hash_map::Entry;

/// Installed segments in chain order.
///
/// The registry is the only place segments live. `dispose_all` before
/// installing a new chain is what keeps rebuilds from stacking segments.
#[derive(Debug, Default)]
pub struct SegmentRegistry {
    entries: Vec<(SegmentId, Segment)>,
    next_id: u32,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment to the end of the chain.
    pub fn register(&mut self, segment: Segment) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, segment));
        id
    }

    /// Drop every installed segment, returning how many there were.
    pub fn dispose_all(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        if n > 0 {
            log::debug!("[registry] disposed {n} segments");
        }
        n
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &Segment)> {
        self.entries.iter().map(|(id, s)| (*id, s))
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.entries.iter().map(|(_, s)| s)
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, s)| s)
    }

    pub fn segments_for(&self, section: SectionId) -> impl Iterator<Item = &Segment> {
        self.segments().filter(move |s| s.section() == section)
    }

    /// Measure every region against the viewport, then sweep the chain so
    /// regions are ordered and never overlap: each start is raised to the
    /// previous end and each end to at least its start.
    pub fn measure(&mut self, viewport: &impl Viewport) {
        let vh = viewport.viewport_height();
        let mut floor: Option<f32> = None;
        for (_, segment) in &mut self.entries {
            let mut region = match viewport.anchor(segment.section()) {
                Some(rect) => Region::measure(&segment.trigger, rect, vh),
                None => {
                    log::warn!(
                        "[registry] no anchor for {} ({}), collapsing region",
                        segment.section(),
                        segment.kind
                    );
                    let at = floor.unwrap_or(0.0);
                    Region { start: at, end: at }
                }
            };
            if let Some(floor) = floor {
                region.start = region.start.max(floor);
            }
            region.end = region.end.max(region.start);
            floor = Some(region.end);
            segment.region = region;
        }
    }

    /// Progress of one segment at `scroll`, `None` if it is not installed.
    pub fn progress(&self, id: SegmentId, scroll: f32) -> Option<f32> {
        self.get(id).map(|s| s.progress(scroll))
    }

    /// Segment allowed to write each property at `scroll`: the last one
    /// carrying it whose region has started, else the first one carrying it.
    pub fn writers(&self, scroll: f32) -> FnvHashMap<Property, SegmentId> {
        let mut writers: FnvHashMap<Property, SegmentId> = FnvHashMap::default();
        for (id, segment) in &self.entries {
            let started = segment.region.start <= scroll;
            for track in &segment.tracks {
                match writers.entry(track.property) {
                    Entry::Occupied(mut e) => {
                        if started {
                            e.insert(*id);
                        }
                    }
                    Entry::Vacant(e) => {
                        e.insert(*id);
                    }
                }
            }
        }
        writers
    }

    /// Evaluate the chain at `scroll` and write every property exactly once,
    /// each from its writer in [`writers`](Self::writers).
    ///
    /// Returns the number of property writes.
    pub fn apply(&self, scroll: f32, targets: &mut Targets) -> usize {
        let mut written = 0;
        for (property, id) in self.writers(scroll) {
            let Some(segment) = self.get(id) else {
                continue;
            };
            if let Some(track) = segment.track(property) {
                property.write(track.sample(segment.progress(scroll)), targets);
                written += 1;
            }
        }
        written
    }
}
