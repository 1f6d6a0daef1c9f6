// Region measurement, ordering and single-writer evaluation.

use glam::Vec3;
use scrollcam_core::choreography;
use scrollcam_core::{
    AnchorRect, DirectorConfig, ModelFrame, ModelPresence, Property, SectionId, SegmentKind,
    SegmentRegistry, StackedViewport, Targets, Value, Viewport, SHOTS,
};

fn model() -> ModelPresence {
    ModelPresence::Present(ModelFrame::new(Vec3::ZERO, 2.0, 0.0))
}

fn installed(viewport: &impl Viewport) -> SegmentRegistry {
    let mut registry = SegmentRegistry::new();
    for segment in choreography::build(SHOTS, &model(), &DirectorConfig::default()) {
        registry.register(segment);
    }
    registry.measure(viewport);
    registry
}

#[test]
fn stacked_sections_tile_the_scroll_range() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let registry = installed(&vp);
    let regions: Vec<_> = registry.segments().map(|s| s.region()).collect();
    assert_eq!(regions[0].start, 0.0);
    for pair in regions.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert!(pair[1].end > pair[1].start);
    }
    assert_eq!(regions.last().unwrap().end, vp.max_scroll());
}

/// Sections laid out out of order with a missing anchor.
struct Scrambled;

impl Viewport for Scrambled {
    fn scroll_offset(&self) -> f32 {
        0.0
    }
    fn viewport_height(&self) -> f32 {
        600.0
    }
    fn anchor(&self, section: SectionId) -> Option<AnchorRect> {
        match section {
            SectionId::Hero => Some(AnchorRect { top: 0.0, height: 600.0 }),
            SectionId::Shot(1) => None,
            // every shot stacked on the same spot, overlapping the hero
            SectionId::Shot(_) => Some(AnchorRect { top: 300.0, height: 400.0 }),
            SectionId::Footer => Some(AnchorRect { top: 100.0, height: 50.0 }),
        }
    }
}

#[test]
fn measure_enforces_ordered_non_overlapping_regions() {
    let registry = installed(&Scrambled);
    let regions: Vec<_> = registry.segments().map(|s| s.region()).collect();
    for pair in regions.windows(2) {
        assert!(pair[0].start <= pair[0].end);
        assert!(pair[0].end <= pair[1].start, "{pair:?}");
    }
}

#[test]
fn register_hands_out_distinct_ids_and_dispose_clears() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let mut registry = installed(&vp);
    let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
    let mut dedup = ids.clone();
    dedup.dedup();
    assert_eq!(ids.len(), dedup.len());
    assert_eq!(registry.len(), 2 * SHOTS.len() + 3);

    let first = ids[0];
    assert_eq!(registry.progress(first, 0.0), Some(0.0));
    assert_eq!(registry.dispose_all(), 2 * SHOTS.len() + 3);
    assert!(registry.is_empty());
    assert_eq!(registry.progress(first, 0.0), None);
    assert_eq!(registry.dispose_all(), 0);
}

#[test]
fn progress_clamps_before_and_after_a_region() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let registry = installed(&vp);
    let (id, push) = registry
        .iter()
        .find(|(_, s)| s.kind == SegmentKind::PushIn(1))
        .unwrap();
    let region = push.region();
    assert_eq!(registry.progress(id, region.start - 500.0), Some(0.0));
    assert_eq!(registry.progress(id, region.end + 500.0), Some(1.0));
    let mid = (region.start + region.end) / 2.0;
    assert_eq!(registry.progress(id, mid), Some(0.5));
}

#[test]
fn exactly_one_writer_per_property() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let registry = installed(&vp);
    let carried: std::collections::HashSet<Property> = registry
        .segments()
        .flat_map(|s| s.tracks.iter().map(|t| t.property))
        .collect();
    let mut targets = Targets::default();
    let mut scroll = -100.0;
    while scroll <= vp.max_scroll() + 100.0 {
        let writers = registry.writers(scroll);
        assert_eq!(registry.apply(scroll, &mut targets), carried.len());
        assert_eq!(writers.len(), carried.len());

        let writer = registry.get(writers[&Property::CameraPosition]).unwrap();
        // the writer has started unless nothing has
        let any_started = registry
            .segments()
            .any(|s| s.drives(Property::CameraPosition) && s.region().start <= scroll);
        assert_eq!(writer.region().start <= scroll, any_started);

        let expected = writer
            .sample(writer.progress(scroll))
            .find(|(p, _)| *p == Property::CameraPosition)
            .map(|(_, v)| v);
        assert_eq!(expected, Some(Value::Vector(targets.rig.position())));
        scroll += 37.0;
    }
}

#[test]
fn apply_writes_the_active_segment_values() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let registry = installed(&vp);
    let mut targets = Targets::default();

    let push = registry
        .segments()
        .find(|s| s.kind == SegmentKind::PushIn(0))
        .unwrap();
    let region = push.region();

    registry.apply(region.start, &mut targets);
    assert_eq!(
        Some(Value::Vector(targets.rig.position())),
        push.start_of(Property::CameraPosition)
    );

    registry.apply(region.end, &mut targets);
    // at the boundary the handoff owns the property at t = 0, which is the same value
    assert_eq!(
        Some(Value::Vector(targets.rig.position())),
        push.end_of(Property::CameraPosition)
    );
    let caption = targets.caption(SectionId::Shot(0)).unwrap();
    assert_eq!(caption.opacity, 1.0);
    assert_eq!(caption.offset_px, 0.0);

    // later shots' captions stay hidden
    let hidden = targets.caption(SectionId::Shot(3)).unwrap();
    assert_eq!(hidden.opacity, 0.0);
}

#[test]
fn apply_before_everything_holds_the_hero_framing() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let registry = installed(&vp);
    let config = DirectorConfig::default();
    let mut targets = Targets::default();
    let writes = registry.apply(-1_000.0, &mut targets);
    assert!(writes > 0);
    let hero = model().resolve(&config.hero);
    assert_eq!(targets.rig.position(), hero.position);
    assert_eq!(targets.rig.look_at(), hero.look_at);
    assert_eq!(targets.caption(SectionId::Hero).unwrap().opacity, 1.0);
}

#[test]
fn camera_is_continuous_while_scrolling() {
    let vp = StackedViewport::new(SHOTS.len(), 800.0);
    let registry = installed(&vp);
    let mut targets = Targets::default();
    let mut prev: Option<Vec3> = None;
    let step = 1.0;
    let mut scroll = 0.0;
    while scroll <= vp.max_scroll() {
        registry.apply(scroll, &mut targets);
        let pos = targets.rig.position();
        if let Some(prev) = prev {
            // no jumps: a 1px scroll never moves the camera more than a few units
            assert!(
                (pos - prev).length() < 0.5,
                "jump of {} at scroll {scroll}",
                (pos - prev).length()
            );
        }
        prev = Some(pos);
        scroll += step;
    }
}
