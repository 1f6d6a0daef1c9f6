//! The per-frame copy from rig to camera.

use crate::rig::Targets;
use glam::Vec3;

/// The actual render camera and scene.
pub trait RenderTarget {
    fn set_position(&mut self, position: Vec3);
    /// Orient the camera toward `target`.
    fn look_at(&mut self, target: Vec3);
    fn set_model_yaw(&mut self, yaw: f32);
    fn draw(&mut self);
}

/// Copy rig state into the camera and draw. No interpolation happens here.
pub fn render_step(targets: &Targets, target: &mut impl RenderTarget) {
    target.set_position(targets.rig.position());
    target.look_at(targets.rig.look_at());
    if let Some(yaw) = targets.model_yaw {
        target.set_model_yaw(yaw);
    }
    target.draw();
}
