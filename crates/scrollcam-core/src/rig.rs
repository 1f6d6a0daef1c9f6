//! The camera rig and the other targets the choreography writes.

use crate::viewport::SectionId;
use fnv::FnvHashMap;
use glam::Vec3;

/// Shared camera state: written by the choreography, copied by the render step.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CameraRig {
    position: Vec3,
    look_at: Vec3,
    revision: u64,
}

impl CameraRig {
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Number of writes since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.revision += 1;
    }

    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
        self.revision += 1;
    }
}

/// Opacity and vertical offset of one section caption.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionPose {
    pub opacity: f32,
    pub offset_px: f32,
}

impl CaptionPose {
    pub const fn new(opacity: f32, offset_px: f32) -> Self {
        Self { opacity, offset_px }
    }
}

impl Default for CaptionPose {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}

/// Everything a tick may write: rig, model yaw and caption poses.
#[derive(Clone, Debug, Default)]
pub struct Targets {
    pub rig: CameraRig,
    pub model_yaw: Option<f32>,
    pub captions: FnvHashMap<SectionId, CaptionPose>,
}

impl Targets {
    pub fn caption(&self, section: SectionId) -> Option<CaptionPose> {
        self.captions.get(&section).copied()
    }

    pub(crate) fn caption_mut(&mut self, section: SectionId) -> &mut CaptionPose {
        self.captions.entry(section).or_default()
    }
}
