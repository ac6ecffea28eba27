//! Seeded generation of the celestial field seen from one place at one time.
//!
//! The field is a pure function of `(instant, location)`: the two are folded into
//! a single scalar seed whose bit pattern keys a ChaCha8 generator. Every body
//! draws from its own ChaCha stream, selected by the body's running index, so
//! bodies are independent of one another yet bit-reproducible on any platform.
//!
//! # Field layout
//!
//! 1. `count` procedural bodies, ids `star-0` .. `star-{count-1}`
//! 2. the [`REFERENCE_STARS`], ids `named-star-0` .. `named-star-9`
//!
//! Outside the configured night window the procedural altitude distribution is
//! compressed and shifted down so that most bodies sink below the horizon.
//! Reference stars are never suppressed; they sit in a mid-altitude band so they
//! are normally visible and labelled.

pub mod named;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::FieldConfig;
use crate::coords::SkyPosition;
use crate::observer::{Instant, Location};
pub use named::{ReferenceStar, REFERENCE_STARS};

/// How a body entered the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Procedural,
    Named,
}

/// A single point of light on the observer's sky
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub id: String,
    pub name: Option<String>,
    /// Visual magnitude, lower is brighter
    pub magnitude: f64,
    /// Degrees above the horizon, negative when below it
    pub altitude: f64,
    /// Degrees clockwise from north, in [0, 360)
    pub azimuth: f64,
    pub kind: BodyKind,
}

impl SkyPosition for CelestialBody {
    fn altitude(&self) -> f64 {
        self.altitude
    }

    fn azimuth(&self) -> f64 {
        self.azimuth
    }
}

/// Scalar seed for a given observation.
///
/// Combines epoch milliseconds with the observer's coordinates; nearby sites at
/// the same instant get different skies.
pub fn field_seed(instant: &Instant, location: &Location) -> f64 {
    instant.epoch_millis() as f64 + location.latitude * 100.0 + location.longitude
}

/// Whether the instant falls inside the configured night window
pub fn is_night(instant: &Instant, config: &FieldConfig) -> bool {
    config.night_window.contains(instant.hour())
}

/// Independent random stream for the body at `index`
fn body_stream(seed: f64, index: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.to_bits());
    rng.set_stream(index as u64);
    rng
}

/// Generate `count` procedural bodies followed by the reference stars, using the
/// default field parameters.
pub fn generate(instant: &Instant, location: &Location, count: usize) -> Vec<CelestialBody> {
    generate_with_config(instant, location, count, &FieldConfig::default())
}

/// Generate a field with explicit parameters.
///
/// `config.body_count` is ignored in favour of `count`.
pub fn generate_with_config(
    instant: &Instant,
    location: &Location,
    count: usize,
    config: &FieldConfig,
) -> Vec<CelestialBody> {
    let seed = field_seed(instant, location);
    let night = is_night(instant, config);

    let mut bodies = Vec::with_capacity(count.saturating_add(REFERENCE_STARS.len()));

    for index in 0..count {
        let mut rng = body_stream(seed, index);

        // Folded uniform draw: 0 and 1 both land on the horizon, 0.5 on the zenith
        let mut altitude = 90.0 - (rng.random::<f64>() * 180.0 - 90.0).abs();
        if !night {
            altitude = altitude * config.day_altitude_scale + config.day_altitude_offset_deg;
        }
        let azimuth = rng.random::<f64>() * 360.0;
        let magnitude = lerp(&config.procedural_magnitude, rng.random::<f64>());

        bodies.push(CelestialBody {
            id: format!("star-{index}"),
            name: None,
            magnitude,
            altitude,
            azimuth,
            kind: BodyKind::Procedural,
        });
    }

    for (k, star) in REFERENCE_STARS.iter().enumerate() {
        let mut rng = body_stream(seed, count + k);
        let altitude = lerp(&config.named_altitude_band, rng.random::<f64>());

        bodies.push(CelestialBody {
            id: format!("named-star-{k}"),
            name: Some(star.name.to_string()),
            magnitude: star.magnitude,
            altitude,
            azimuth: named::reference_azimuth(k),
            kind: BodyKind::Named,
        });
    }

    log::debug!(
        "Generated {} bodies for {} at {} (night: {}, seed: {})",
        bodies.len(),
        location.name,
        instant,
        night,
        seed
    );

    bodies
}

fn lerp(range: &std::ops::Range<f64>, t: f64) -> f64 {
    range.start + t * (range.end - range.start)
}
