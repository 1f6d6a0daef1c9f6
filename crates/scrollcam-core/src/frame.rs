//! Denormalization of shot coordinates against the loaded model.

use crate::catalog::SubShot;
use crate::constants::MIN_MODEL_RADIUS;
use glam::Vec3;

/// World-space bounding sphere reported by the asset source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub radius: f32,
}

/// The model's world-space center, bounding radius and base yaw.
///
/// Computed once when the model arrives and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelFrame {
    center: Vec3,
    radius: f32,
    base_yaw: f32,
}

impl ModelFrame {
    /// The radius is clamped to [`MIN_MODEL_RADIUS`]; a non-finite radius is
    /// treated as the minimum as well.
    pub fn new(center: Vec3, radius: f32, base_yaw: f32) -> Self {
        let radius = if radius.is_finite() {
            radius.max(MIN_MODEL_RADIUS)
        } else {
            MIN_MODEL_RADIUS
        };
        Self {
            center,
            radius,
            base_yaw,
        }
    }

    pub fn from_bounds(bounds: Bounds, base_yaw: f32) -> Self {
        Self::new(bounds.center, bounds.radius, base_yaw)
    }

    /// Unit frame used for camera placement when no model is available.
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, 1.0, 0.0)
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn base_yaw(&self) -> f32 {
        self.base_yaw
    }

    /// `center + v * radius`
    #[inline]
    pub fn world_of(&self, v: Vec3) -> Vec3 {
        self.center + v * self.radius
    }
}

/// A sub-shot resolved to world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Absolute model yaw; `None` when there is no model to rotate.
    pub yaw: Option<f32>,
}

/// Whether a model frame exists for this session.
///
/// Checked once per rebuild: an absent model simply produces framings
/// without yaw, so no per-frame code has to ask again.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ModelPresence {
    Present(ModelFrame),
    #[default]
    Absent,
}

impl ModelPresence {
    pub fn frame(&self) -> Option<&ModelFrame> {
        match self {
            Self::Present(frame) => Some(frame),
            Self::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Resolve a sub-shot to world space.
    ///
    /// With no model the unit frame places the camera and yaw is dropped.
    pub fn resolve(&self, shot: &SubShot) -> Framing {
        match self {
            Self::Present(frame) => Framing {
                position: frame.world_of(shot.cam),
                look_at: frame.world_of(shot.look),
                yaw: Some(frame.base_yaw + shot.rot_y.unwrap_or(0.0)),
            },
            Self::Absent => {
                let unit = ModelFrame::unit();
                Framing {
                    position: unit.world_of(shot.cam),
                    look_at: unit.world_of(shot.look),
                    yaw: None,
                }
            }
        }
    }
}
