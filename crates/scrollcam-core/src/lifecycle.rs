//! The director: model readiness, (re)builds, resize and teardown.

use crate::catalog::{self, Shot};
use crate::choreography;
use crate::config::DirectorConfig;
use crate::error::Result;
use crate::frame::{Bounds, ModelFrame, ModelPresence};
use crate::progress::LoadProgress;
use crate::registry::SegmentRegistry;
use crate::render::{render_step, RenderTarget};
use crate::rig::Targets;
use crate::scrub::Scrub;
use crate::viewport::Viewport;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    AwaitingModel,
    Active,
    Disposed,
}

/// Owns the rig, the segment registry and the lifecycle around them.
///
/// Every entry point is safe to call in any phase. Calls that make no sense
/// in the current phase (a load callback after `dispose`, a resize before the
/// model) are ignored and logged rather than reported.
pub struct Director {
    phase: Phase,
    shots: Vec<Shot>,
    config: DirectorConfig,
    /// `None` until the load resolves either way.
    model: Option<ModelPresence>,
    registry: SegmentRegistry,
    targets: Targets,
    scrub: Scrub,
    progress: LoadProgress,
    /// Time since the most recent unhandled resize event.
    resize_pending: Option<Duration>,
    waited: Duration,
    ready_fired: bool,
    ready_taken: bool,
    rebuilds: u32,
}

impl Director {
    pub fn new(shots: &[Shot], config: DirectorConfig) -> Result<Self> {
        catalog::validate(shots)?;
        config.validate()?;
        Ok(Self {
            phase: Phase::Uninitialized,
            shots: shots.to_vec(),
            scrub: Scrub::new(config.scrub_tau_sec, config.scrub_snap_px),
            config,
            model: None,
            registry: SegmentRegistry::new(),
            targets: Targets::default(),
            progress: LoadProgress::new(),
            resize_pending: None,
            waited: Duration::ZERO,
            ready_fired: false,
            ready_taken: false,
            rebuilds: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    /// `None` while loading, then the resolved presence.
    pub fn model(&self) -> Option<&ModelPresence> {
        self.model.as_ref()
    }

    pub fn registry(&self) -> &SegmentRegistry {
        &self.registry
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn load_percent(&self) -> u8 {
        self.progress.percent()
    }

    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }

    /// The load has started; scroll has no camera effect until it resolves.
    pub fn begin_loading(&mut self) {
        match self.phase {
            Phase::Uninitialized => {
                self.phase = Phase::AwaitingModel;
                log::info!("[director] awaiting model ({} shots)", self.shots.len());
            }
            phase => log::warn!("[director] begin_loading ignored in {phase}"),
        }
    }

    pub fn on_load_progress(&mut self, loaded: u64, total: Option<u64>) -> u8 {
        if self.phase == Phase::Disposed {
            return self.progress.percent();
        }
        self.progress.update(loaded, total)
    }

    /// The model arrived: fix its frame, place the camera on the hero
    /// framing and install the chain.
    pub fn on_model_ready(&mut self, bounds: Bounds, base_yaw: f32, viewport: &impl Viewport) {
        if !self.accepts_resolution() {
            return;
        }
        let frame = ModelFrame::from_bounds(bounds, base_yaw);
        log::info!(
            "[director] model ready: center=({:.2},{:.2},{:.2}) radius={:.3}",
            frame.center().x,
            frame.center().y,
            frame.center().z,
            frame.radius()
        );
        self.resolve(ModelPresence::Present(frame), viewport);
    }

    /// The load failed. The page still becomes ready with a model-less chain:
    /// camera motion on the unit frame, no yaw.
    pub fn on_model_failed(&mut self, error: impl fmt::Display, viewport: &impl Viewport) {
        if !self.accepts_resolution() {
            return;
        }
        log::warn!("[director] model load failed, continuing without model: {error}");
        self.resolve(ModelPresence::Absent, viewport);
    }

    /// Only the first load resolution before `dispose` counts.
    fn accepts_resolution(&self) -> bool {
        match self.phase {
            Phase::Disposed => {
                log::debug!("[director] load resolved after dispose, ignoring");
                false
            }
            Phase::Active => {
                log::warn!("[director] model already resolved, ignoring second resolution");
                false
            }
            Phase::Uninitialized | Phase::AwaitingModel => true,
        }
    }

    fn resolve(&mut self, presence: ModelPresence, viewport: &impl Viewport) {
        self.model = Some(presence);
        self.progress.finish();
        choreography::seed_targets(&mut self.targets, &self.shots, &presence, &self.config);
        self.phase = Phase::Active;
        self.rebuild(viewport);
        self.fire_ready();
    }

    /// Dispose the installed chain and install a fresh one.
    ///
    /// Returns the number of installed segments; zero when there is no
    /// model resolution yet or the director is disposed.
    pub fn rebuild(&mut self, viewport: &impl Viewport) -> usize {
        let Some(model) = self.model.filter(|_| self.phase == Phase::Active) else {
            log::debug!("[director] rebuild ignored in {}", self.phase);
            return 0;
        };
        self.registry.dispose_all();
        for segment in choreography::build(&self.shots, &model, &self.config) {
            self.registry.register(segment);
        }
        self.registry.measure(viewport);
        self.scrub.reset();
        self.resize_pending = None;
        self.rebuilds += 1;
        log::info!(
            "[director] installed {} segments (rebuild #{})",
            self.registry.len(),
            self.rebuilds
        );
        self.registry.len()
    }

    /// Note a resize; anchors are re-measured once events stop for the
    /// debounce window.
    pub fn on_resize(&mut self) {
        if self.phase != Phase::Active {
            return;
        }
        self.resize_pending = Some(Duration::ZERO);
    }

    /// Advance one display frame. Returns `true` if any target was written.
    pub fn tick(&mut self, dt: Duration, viewport: &impl Viewport) -> bool {
        match self.phase {
            Phase::Uninitialized | Phase::Disposed => false,
            Phase::AwaitingModel => {
                self.waited += dt;
                if !self.ready_fired && self.waited >= self.config.ready_timeout {
                    log::warn!(
                        "[director] model not ready after {:?}, releasing page",
                        self.config.ready_timeout
                    );
                    self.fire_ready();
                }
                false
            }
            Phase::Active => {
                if let Some(elapsed) = self.resize_pending.as_mut() {
                    *elapsed += dt;
                    if *elapsed >= self.config.resize_debounce {
                        self.resize_pending = None;
                        self.registry.measure(viewport);
                        log::debug!("[director] re-measured {} regions", self.registry.len());
                    }
                }
                let scroll = self
                    .scrub
                    .step(viewport.scroll_offset(), dt.as_secs_f32());
                self.registry.apply(scroll, &mut self.targets) > 0
            }
        }
    }

    /// Copy the rig into the camera and draw. Only runs while active.
    pub fn render(&self, target: &mut impl RenderTarget) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        render_step(&self.targets, target);
        true
    }

    fn fire_ready(&mut self) {
        if !self.ready_fired {
            self.ready_fired = true;
            log::info!("[director] ready");
        }
    }

    /// One-shot: `true` the first time it is called after the page became ready.
    pub fn take_ready(&mut self) -> bool {
        if self.ready_fired && !self.ready_taken {
            self.ready_taken = true;
            return true;
        }
        false
    }

    /// Dispose every segment and stop reacting to anything.
    pub fn dispose(&mut self) -> usize {
        if self.phase == Phase::Disposed {
            return 0;
        }
        let n = self.registry.dispose_all();
        self.resize_pending = None;
        self.phase = Phase::Disposed;
        log::info!("[director] disposed ({n} segments)");
        n
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::AwaitingModel => "awaiting-model",
            Phase::Active => "active",
            Phase::Disposed => "disposed",
        };
        f.write_str(name)
    }
}
