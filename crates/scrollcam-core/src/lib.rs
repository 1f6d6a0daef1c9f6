//! Scroll-driven camera choreography over a single 3D model.
//!
//! Platform-free: the page, the camera and the asset loader are reached
//! through the [`Viewport`] and [`RenderTarget`] traits so the whole chain can
//! be driven from host tests as well as from the wasm front-end.

pub mod anchor;
pub mod catalog;
pub mod choreography;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod lifecycle;
pub mod path;
pub mod progress;
pub mod registry;
pub mod render;
pub mod rig;
pub mod scrub;
pub mod segment;
pub mod viewport;

pub use anchor::{AnchorPoint, Edge, Region, Trigger};
pub use catalog::{Shot, SubShot, SHOTS};
pub use config::{DirectorConfig, Span, TriggerTable};
pub use error::{ChoreographyError, Result};
pub use frame::{Bounds, Framing, ModelFrame, ModelPresence};
pub use lifecycle::{Director, Phase};
pub use progress::LoadProgress;
pub use registry::SegmentRegistry;
pub use render::{render_step, RenderTarget};
pub use rig::{CameraRig, CaptionPose, Targets};
pub use scrub::Scrub;
pub use segment::{Property, Segment, SegmentId, SegmentKind, Track, Value};
pub use viewport::{AnchorRect, SectionId, StackedViewport, Viewport};
