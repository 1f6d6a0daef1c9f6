//! Load-progress percentage reported to the loading overlay.

use crate::constants::{PROGRESS_FALLBACK_CEILING, PROGRESS_FALLBACK_STEP};

/// Monotonic 0–100 load percentage.
///
/// With a known total the value is the loaded ratio. Without one it creeps
/// up by a fixed step per event and stops short of 100; only the terminal
/// event completes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    percent: u8,
    done: bool,
}

impl LoadProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Fold in a progress event and return the new percentage.
    pub fn update(&mut self, loaded: u64, total: Option<u64>) -> u8 {
        if self.done {
            return self.percent;
        }
        let candidate = match total {
            Some(total) if total > 0 => {
                let pct = (loaded.min(total) as f64 / total as f64 * 100.0).floor();
                pct.clamp(0.0, 100.0) as u8
            }
            _ => self
                .percent
                .saturating_add(PROGRESS_FALLBACK_STEP)
                .min(PROGRESS_FALLBACK_CEILING),
        };
        self.percent = self.percent.max(candidate);
        self.percent
    }

    /// Terminal event, success or failure.
    pub fn finish(&mut self) -> u8 {
        self.done = true;
        self.percent = 100;
        self.percent
    }
}
