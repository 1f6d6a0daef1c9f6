//! Declarative shot list.
//!
//! Every coordinate here is model-normalized: a multiple of the model's
//! bounding radius, offset from the model's center. They only become world
//! positions once a [`ModelFrame`](crate::ModelFrame) resolves them.

use crate::error::{ChoreographyError, Result};
use fnv::FnvHashSet;
use glam::Vec3;

/// One camera framing: eye position, look-at point and optional model yaw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SubShot {
    pub cam: Vec3,
    pub look: Vec3,
    /// Model yaw relative to the model's base yaw, in radians.
    pub rot_y: Option<f32>,
}

impl SubShot {
    pub const fn new(cam: Vec3, look: Vec3) -> Self {
        Self {
            cam,
            look,
            rot_y: None,
        }
    }

    pub const fn with_rot_y(mut self, rot_y: f32) -> Self {
        self.rot_y = Some(rot_y);
        self
    }

    fn is_finite(&self) -> bool {
        self.cam.is_finite() && self.look.is_finite() && self.rot_y.map_or(true, f32::is_finite)
    }
}

/// A named narrative section with a wide and a close framing.
#[derive(Clone, Debug, PartialEq)]
pub struct Shot {
    pub name: &'static str,
    // Display metadata, only read by the page
    pub label: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub wide: SubShot,
    pub close: SubShot,
}

/// Opening framing shown behind the hero section.
pub const HERO: SubShot =
    SubShot::new(Vec3::new(0.0, 0.35, 3.4), Vec3::new(0.0, 0.05, 0.0)).with_rot_y(-0.6);

/// Centered closing framing shown behind the footer.
pub const FOOTER: SubShot =
    SubShot::new(Vec3::new(0.0, 0.3, 3.0), Vec3::new(0.0, 0.0, 0.0)).with_rot_y(0.0);

pub static SHOTS: &[Shot] = &[
    Shot {
        name: "tank",
        label: "01",
        headline: "Hand-formed tank",
        description: "Two pressings, one seam, polished until the seam disappears.",
        wide: SubShot::new(Vec3::new(1.65, 0.22, 2.0), Vec3::new(0.0, 0.1, 0.0)).with_rot_y(0.35),
        close: SubShot::new(Vec3::new(0.6, 0.45, 0.9), Vec3::new(0.05, 0.3, 0.0)).with_rot_y(0.5),
    },
    Shot {
        name: "engine",
        label: "02",
        headline: "Air-cooled twin",
        description: "Finned barrels and a gear-driven cam, tuned for torque below 4000 rpm.",
        wide: SubShot::new(Vec3::new(-1.8, 0.1, 1.6), Vec3::new(0.0, -0.1, 0.0)).with_rot_y(-0.2),
        close: SubShot::new(Vec3::new(-0.75, -0.05, 0.7), Vec3::new(-0.05, -0.15, 0.0))
            .with_rot_y(-0.35),
    },
    Shot {
        name: "exhaust",
        label: "03",
        headline: "Stainless headers",
        description: "Mandrel-bent pipes sweeping back into a pair of reverse-cone mufflers.",
        wide: SubShot::new(Vec3::new(1.2, -0.2, -1.9), Vec3::new(0.2, -0.25, -0.3)).with_rot_y(2.4),
        close: SubShot::new(Vec3::new(0.55, -0.3, -0.8), Vec3::new(0.3, -0.35, -0.5)),
    },
    Shot {
        name: "cockpit",
        label: "04",
        headline: "Analog cockpit",
        description: "A single chronometric speedometer and nothing else to read.",
        wide: SubShot::new(Vec3::new(0.0, 1.1, 1.7), Vec3::new(0.0, 0.45, 0.2)).with_rot_y(0.0),
        close: SubShot::new(Vec3::new(0.0, 0.85, 0.75), Vec3::new(0.0, 0.55, 0.35)).with_rot_y(0.1),
    },
    Shot {
        name: "rear",
        label: "05",
        headline: "Loop frame tail",
        description: "The frame rail closes into a hoop that carries the seat and the lamp.",
        wide: SubShot::new(Vec3::new(-1.4, 0.4, -1.8), Vec3::new(-0.2, 0.1, -0.4)).with_rot_y(3.3),
        close: SubShot::new(Vec3::new(-0.6, 0.35, -0.85), Vec3::new(-0.25, 0.2, -0.55))
            .with_rot_y(3.1),
    },
];

/// Check that shot names are present and unique and every coordinate is finite.
pub fn validate(shots: &[Shot]) -> Result<()> {
    let mut seen = FnvHashSet::default();
    for (i, shot) in shots.iter().enumerate() {
        if shot.name.trim().is_empty() {
            return Err(ChoreographyError::InvalidCatalog(format!(
                "shot {i} has an empty name"
            )));
        }
        if !seen.insert(shot.name) {
            return Err(ChoreographyError::InvalidCatalog(format!(
                "duplicate shot name {:?}",
                shot.name
            )));
        }
        if !shot.wide.is_finite() || !shot.close.is_finite() {
            return Err(ChoreographyError::InvalidCatalog(format!(
                "shot {:?} has a non-finite coordinate",
                shot.name
            )));
        }
    }
    Ok(())
}
