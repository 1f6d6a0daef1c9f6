// Director phases, rebuild idempotence, failure handling and teardown.

use glam::Vec3;
use scrollcam_core::{
    Bounds, DirectorConfig, Director, ModelPresence, Phase, Property, RenderTarget, SectionId,
    StackedViewport, SHOTS,
};
use scrollcam_core::constants::READY_TIMEOUT;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Default)]
struct RecordingCamera {
    positions: Vec<Vec3>,
    looks: Vec<Vec3>,
    yaws: Vec<f32>,
    draws: usize,
}

impl RenderTarget for RecordingCamera {
    fn set_position(&mut self, position: Vec3) {
        self.positions.push(position);
    }
    fn look_at(&mut self, target: Vec3) {
        self.looks.push(target);
    }
    fn set_model_yaw(&mut self, yaw: f32) {
        self.yaws.push(yaw);
    }
    fn draw(&mut self) {
        self.draws += 1;
    }
}

fn bounds() -> Bounds {
    Bounds {
        center: Vec3::new(0.0, 1.0, 0.0),
        radius: 3.0,
    }
}

fn director() -> Director {
    Director::new(SHOTS, DirectorConfig::unsmoothed()).unwrap()
}

fn viewport() -> StackedViewport {
    StackedViewport::new(SHOTS.len(), 900.0)
}

#[test]
fn phases_advance_on_model_ready() {
    let vp = viewport();
    let mut d = director();
    assert_eq!(d.phase(), Phase::Uninitialized);
    d.begin_loading();
    assert_eq!(d.phase(), Phase::AwaitingModel);
    assert!(d.registry().is_empty());
    d.on_model_ready(bounds(), 0.2, &vp);
    assert_eq!(d.phase(), Phase::Active);
    assert_eq!(d.registry().len(), 2 * SHOTS.len() + 3);
    assert!(d.model().unwrap().is_present());
    assert_eq!(d.load_percent(), 100);
    assert!(d.take_ready());
    assert!(!d.take_ready());
}

#[test]
fn model_ready_places_the_camera_on_the_hero_framing() {
    let vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.on_model_ready(bounds(), 0.2, &vp);
    let hero = d.model().unwrap().resolve(&d.config().hero);
    assert_eq!(d.targets().rig.position(), hero.position);
    assert_eq!(d.targets().rig.look_at(), hero.look_at);
    assert_eq!(d.targets().model_yaw, hero.yaw);
    assert_eq!(d.targets().caption(SectionId::Hero).unwrap().opacity, 1.0);
    assert_eq!(d.targets().caption(SectionId::Shot(0)).unwrap().opacity, 0.0);
}

#[test]
fn scroll_has_no_effect_while_loading() {
    let mut vp = viewport();
    let mut d = director();
    d.begin_loading();
    vp.scroll = 2_000.0;
    assert!(!d.tick(FRAME, &vp));
    assert_eq!(d.targets().rig.revision(), 0);
    let mut cam = RecordingCamera::default();
    assert!(!d.render(&mut cam));
    assert_eq!(cam.draws, 0);
}

#[test]
fn repeated_rebuilds_leave_one_segment_set_per_section() {
    let vp = viewport();
    let mut d = director();
    d.begin_loading();
    // rebuilds and resizes before the model are no-ops
    for _ in 0..5 {
        assert_eq!(d.rebuild(&vp), 0);
        d.on_resize();
    }
    d.on_model_ready(bounds(), 0.0, &vp);
    for _ in 0..10 {
        d.on_resize();
        d.rebuild(&vp);
    }
    assert_eq!(d.rebuilds(), 11);
    assert_eq!(d.registry().len(), 2 * SHOTS.len() + 3);
    assert_eq!(d.registry().segments_for(SectionId::Hero).count(), 2);
    for i in 0..SHOTS.len() {
        assert_eq!(d.registry().segments_for(SectionId::Shot(i)).count(), 2);
    }
    assert_eq!(d.registry().segments_for(SectionId::Footer).count(), 1);
}

#[test]
fn scrolling_to_a_shot_frames_its_close_up() {
    let mut vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.on_model_ready(bounds(), 0.0, &vp);
    let push = d
        .registry()
        .segments()
        .find(|s| s.kind == scrollcam_core::SegmentKind::PushIn(2))
        .unwrap()
        .clone();
    vp.scroll = push.region().end;
    assert!(d.tick(FRAME, &vp));
    let close = d.model().unwrap().resolve(&SHOTS[2].close);
    assert_eq!(d.targets().rig.position(), close.position);
    assert_eq!(d.targets().rig.look_at(), close.look_at);
    assert_eq!(d.targets().model_yaw, close.yaw);

    let mut cam = RecordingCamera::default();
    assert!(d.render(&mut cam));
    assert_eq!(cam.positions, vec![close.position]);
    assert_eq!(cam.looks, vec![close.look_at]);
    assert_eq!(cam.draws, 1);
}

#[test]
fn load_failure_still_becomes_ready_and_scrolls_without_yaw() {
    let mut vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.on_model_failed("404 model.glb", &vp);
    assert_eq!(d.phase(), Phase::Active);
    assert_eq!(d.model(), Some(&ModelPresence::Absent));
    assert!(d.take_ready());
    assert_eq!(d.load_percent(), 100);
    assert!(d
        .registry()
        .segments()
        .all(|s| !s.drives(Property::ModelYaw)));

    let mut cam = RecordingCamera::default();
    let mut scroll = -200.0;
    while scroll <= vp.max_scroll() + 200.0 {
        vp.scroll = scroll;
        d.tick(FRAME, &vp);
        d.render(&mut cam);
        assert!(d.targets().rig.position().is_finite());
        scroll += 50.0;
    }
    assert!(cam.draws > 0);
    assert!(cam.yaws.is_empty());
    assert_eq!(d.targets().model_yaw, None);
}

#[test]
fn ready_fires_after_timeout_without_a_model() {
    let vp = viewport();
    let config = DirectorConfig {
        ready_timeout: Duration::from_millis(100),
        ..DirectorConfig::default()
    };
    let mut d = Director::new(SHOTS, config).unwrap();
    d.begin_loading();
    for _ in 0..5 {
        d.tick(FRAME, &vp);
    }
    assert!(!d.take_ready());
    for _ in 0..2 {
        d.tick(FRAME, &vp);
    }
    assert!(d.take_ready());
    assert_eq!(d.phase(), Phase::AwaitingModel);

    // the model can still arrive afterwards; ready does not fire twice
    d.on_model_ready(bounds(), 0.0, &vp);
    assert_eq!(d.phase(), Phase::Active);
    assert!(!d.take_ready());
}

#[test]
fn ready_timeout_counts_wall_time_on_slow_frames() {
    let vp = viewport();
    let mut d = director();
    d.begin_loading();
    // 4 fps while the asset decodes: every frame is well above the scrub cap
    let slow = Duration::from_millis(250);
    let mut elapsed = Duration::ZERO;
    while elapsed < READY_TIMEOUT - slow {
        d.tick(slow, &vp);
        elapsed += slow;
        assert!(!d.take_ready(), "ready fired early at {elapsed:?}");
    }
    d.tick(slow, &vp);
    assert!(d.take_ready());
}

#[test]
fn second_model_resolution_is_ignored() {
    let vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.on_model_ready(bounds(), 0.0, &vp);
    let frame = *d.model().unwrap();
    d.on_model_ready(
        Bounds {
            center: Vec3::splat(9.0),
            radius: 100.0,
        },
        1.0,
        &vp,
    );
    d.on_model_failed("late error", &vp);
    assert_eq!(*d.model().unwrap(), frame);
    assert_eq!(d.rebuilds(), 1);
}

#[test]
fn resize_remeasures_after_the_debounce_window() {
    let mut vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.on_model_ready(bounds(), 0.0, &vp);
    let footer_before = d.registry().segments().last().unwrap().region();

    vp.viewport_height = 600.0;
    vp.section_height = 600.0;
    vp.footer_height = 600.0;
    d.on_resize();
    d.tick(FRAME, &vp);
    // still inside the debounce window
    assert_eq!(d.registry().segments().last().unwrap().region(), footer_before);
    for _ in 0..10 {
        d.tick(FRAME, &vp);
    }
    let footer_after = d.registry().segments().last().unwrap().region();
    assert_ne!(footer_after, footer_before);
    assert_eq!(footer_after.end, vp.max_scroll());
    // targets were kept, only regions moved
    assert_eq!(d.rebuilds(), 1);
}

#[test]
fn nothing_happens_after_dispose() {
    let mut vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.on_model_ready(bounds(), 0.0, &vp);
    vp.scroll = 1_234.0;
    d.tick(FRAME, &vp);
    assert_eq!(d.dispose(), 2 * SHOTS.len() + 3);
    assert_eq!(d.phase(), Phase::Disposed);
    assert!(d.registry().is_empty());

    let revision = d.targets().rig.revision();
    let mut cam = RecordingCamera::default();
    vp.scroll = 4_000.0;
    d.on_resize();
    assert!(!d.tick(FRAME, &vp));
    assert!(!d.render(&mut cam));
    assert_eq!(d.rebuild(&vp), 0);
    d.on_model_ready(bounds(), 0.0, &vp);
    d.on_model_failed("late", &vp);
    assert_eq!(d.targets().rig.revision(), revision);
    assert_eq!(cam.draws, 0);
    assert!(cam.positions.is_empty());
    assert_eq!(d.dispose(), 0);
}

#[test]
fn late_load_after_dispose_is_ignored() {
    let vp = viewport();
    let mut d = director();
    d.begin_loading();
    d.dispose();
    d.on_load_progress(10, Some(100));
    d.on_model_ready(bounds(), 0.0, &vp);
    assert_eq!(d.phase(), Phase::Disposed);
    assert!(d.model().is_none());
    assert!(d.registry().is_empty());
    assert_eq!(d.targets().rig.revision(), 0);
    assert!(!d.take_ready());
}

#[test]
fn scrub_smooths_toward_the_scroll_offset() {
    let mut vp = viewport();
    let mut d = Director::new(SHOTS, DirectorConfig::default()).unwrap();
    d.begin_loading();
    d.on_model_ready(bounds(), 0.0, &vp);
    let push = d
        .registry()
        .segments()
        .find(|s| s.kind == scrollcam_core::SegmentKind::PushIn(0))
        .unwrap()
        .clone();
    vp.scroll = push.region().start;
    for _ in 0..600 {
        d.tick(FRAME, &vp);
    }
    let wide = d.model().unwrap().resolve(&SHOTS[0].wide).position;
    assert_eq!(d.targets().rig.position(), wide);

    vp.scroll = push.region().end;
    d.tick(FRAME, &vp);
    let close = d.model().unwrap().resolve(&SHOTS[0].close).position;
    let first = d.targets().rig.position();
    assert_ne!(first, close, "one frame should not reach the target");
    assert_ne!(first, wide);

    for _ in 0..600 {
        d.tick(FRAME, &vp);
    }
    assert_eq!(d.targets().rig.position(), close);
}

#[test]
fn invalid_config_is_rejected() {
    let config = DirectorConfig {
        scrub_tau_sec: -1.0,
        ..DirectorConfig::default()
    };
    assert!(Director::new(SHOTS, config).is_err());
}
