//! Observer-relative horizontal coordinates.
//!
//! Altitude is measured in degrees above the horizon (90 at the zenith, negative
//! below the horizon). Azimuth is a compass bearing in degrees, 0 at north and
//! increasing clockwise through east.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the observer's sky in the horizontal system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoord {
    /// Degrees above the horizon
    pub altitude: f64,
    /// Degrees clockwise from north
    pub azimuth: f64,
}

impl HorizontalCoord {
    /// Create a new coordinate from altitude and azimuth in degrees
    pub fn new(altitude: f64, azimuth: f64) -> Self {
        Self { altitude, azimuth }
    }

    /// The point directly overhead
    pub fn zenith() -> Self {
        Self::new(90.0, 0.0)
    }
}

impl fmt::Display for HorizontalCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "alt {:.2}°, az {:.2}°", self.altitude, self.azimuth)
    }
}

/// Anything that can be located on the observer's sky
pub trait SkyPosition {
    /// Degrees above the horizon
    fn altitude(&self) -> f64;

    /// Degrees clockwise from north
    fn azimuth(&self) -> f64;

    fn horizontal(&self) -> HorizontalCoord {
        HorizontalCoord::new(self.altitude(), self.azimuth())
    }
}

impl SkyPosition for HorizontalCoord {
    fn altitude(&self) -> f64 {
        self.altitude
    }

    fn azimuth(&self) -> f64 {
        self.azimuth
    }
}

impl<T: SkyPosition + ?Sized> SkyPosition for &T {
    fn altitude(&self) -> f64 {
        (**self).altitude()
    }

    fn azimuth(&self) -> f64 {
        (**self).azimuth()
    }
}
