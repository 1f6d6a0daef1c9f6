// Coordinate normalization against the model frame.

use glam::Vec3;
use scrollcam_core::constants::MIN_MODEL_RADIUS;
use scrollcam_core::{Bounds, ModelFrame, ModelPresence, SubShot};

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < 1e-5
}

#[test]
fn world_of_scales_by_radius_then_translates() {
    let frame = ModelFrame::new(Vec3::ZERO, 5.0, 0.0);
    let w = frame.world_of(Vec3::new(1.65, 0.22, 2.0));
    assert!(approx(w, Vec3::new(8.25, 1.1, 10.0)), "got {w:?}");
}

#[test]
fn world_of_offsets_from_center() {
    let frame = ModelFrame::new(Vec3::new(1.0, -2.0, 3.0), 2.0, 0.0);
    assert!(approx(frame.world_of(Vec3::ZERO), Vec3::new(1.0, -2.0, 3.0)));
    assert!(approx(
        frame.world_of(Vec3::new(0.5, 0.5, -1.0)),
        Vec3::new(2.0, -1.0, 1.0)
    ));
}

#[test]
fn radius_is_clamped_to_epsilon() {
    assert_eq!(ModelFrame::new(Vec3::ZERO, 0.0, 0.0).radius(), MIN_MODEL_RADIUS);
    assert_eq!(ModelFrame::new(Vec3::ZERO, -3.0, 0.0).radius(), MIN_MODEL_RADIUS);
    assert_eq!(
        ModelFrame::new(Vec3::ZERO, f32::NAN, 0.0).radius(),
        MIN_MODEL_RADIUS
    );
    assert_eq!(ModelFrame::new(Vec3::ZERO, 4.0, 0.0).radius(), 4.0);
}

#[test]
fn from_bounds_keeps_center_radius_and_yaw() {
    let frame = ModelFrame::from_bounds(
        Bounds {
            center: Vec3::new(0.0, 1.0, 0.0),
            radius: 2.5,
        },
        0.75,
    );
    assert_eq!(frame.center(), Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(frame.radius(), 2.5);
    assert_eq!(frame.base_yaw(), 0.75);
}

#[test]
fn present_model_adds_base_yaw() {
    let presence = ModelPresence::Present(ModelFrame::new(Vec3::ZERO, 2.0, 0.5));
    let shot = SubShot::new(Vec3::new(1.0, 0.0, 1.0), Vec3::ZERO).with_rot_y(0.25);
    let framing = presence.resolve(&shot);
    assert!(approx(framing.position, Vec3::new(2.0, 0.0, 2.0)));
    assert_eq!(framing.yaw, Some(0.75));

    let no_rot = SubShot::new(Vec3::ONE, Vec3::ZERO);
    assert_eq!(presence.resolve(&no_rot).yaw, Some(0.5));
}

#[test]
fn absent_model_uses_unit_frame_and_drops_yaw() {
    let shot = SubShot::new(Vec3::new(1.65, 0.22, 2.0), Vec3::new(0.0, 0.1, 0.0)).with_rot_y(1.0);
    let framing = ModelPresence::Absent.resolve(&shot);
    assert_eq!(framing.position, shot.cam);
    assert_eq!(framing.look_at, shot.look);
    assert_eq!(framing.yaw, None);
    assert!(ModelPresence::Absent.frame().is_none());
}
