//! Deterministic night-sky generation and zenith-centred sky projection.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`field`] turns an observation `(time, location)` into a reproducible set
//!    of celestial bodies, procedural stars followed by ten reference stars.
//! 2. [`constellation`] threads constellations through the visible part of that
//!    field. Together they form a [`Frame`].
//! 3. [`scene`] projects a frame onto a [`Surface`] and emits an ordered list of
//!    draw instructions, culling everything below the horizon.
//!
//! Identical inputs always yield identical frames, so a frame can be regenerated
//! anywhere instead of being stored.

pub mod config;
pub mod constellation;
pub mod coords;
pub mod error;
pub mod field;
pub mod frame;
pub mod observer;
pub mod projection;
pub mod scene;
pub mod shared_args;
pub mod visibility;

pub use config::{FieldConfig, NightWindow, SceneStyle, SkyConfig};
pub use constellation::{Constellation, ConstellationDef, ConstellationLine};
pub use coords::{HorizontalCoord, SkyPosition};
pub use error::{Result, SkyError};
pub use field::{generate, BodyKind, CelestialBody};
pub use frame::Frame;
pub use observer::{Instant, Location};
pub use projection::{project, Surface};
pub use scene::{compose, DrawInstruction, Guide, RenderableScene, Segment, StarMark};
pub use visibility::is_visible;
