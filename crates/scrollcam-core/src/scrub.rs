//! The scrub follower: the one place camera motion is smoothed in time.

use crate::constants::SCRUB_MAX_DT_SEC;

/// Exponential follower of the raw scroll offset.
///
/// Regions read the smoothed offset, so every segment sees the same eased
/// progress and none of them adds easing of its own.
#[derive(Clone, Debug)]
pub struct Scrub {
    tau_sec: f32,
    snap: f32,
    current: Option<f32>,
}

impl Scrub {
    pub fn new(tau_sec: f32, snap: f32) -> Self {
        Self {
            tau_sec: tau_sec.max(0.0),
            snap: snap.max(0.0),
            current: None,
        }
    }

    /// Smoothed offset, if any sample has been taken.
    pub fn current(&self) -> Option<f32> {
        self.current
    }

    /// Jump straight to `target` on the next step.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Advance toward `target` by `dt_sec` and return the smoothed offset.
    ///
    /// The first sample, a zero time constant and anything within the snap
    /// distance land exactly on the target. `dt_sec` is capped at
    /// `SCRUB_MAX_DT_SEC` so a stalled frame does not jump the camera.
    pub fn step(&mut self, target: f32, dt_sec: f32) -> f32 {
        let next = match self.current {
            None => target,
            Some(_) if self.tau_sec == 0.0 => target,
            Some(cur) => {
                let dt_sec = dt_sec.clamp(0.0, SCRUB_MAX_DT_SEC);
                let alpha = 1.0 - (-dt_sec / self.tau_sec).exp();
                let next = cur + (target - cur) * alpha;
                if (target - next).abs() <= self.snap {
                    target
                } else {
                    next
                }
            }
        };
        self.current = Some(next);
        next
    }
}
