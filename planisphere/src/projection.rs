//! Zenith-centred azimuthal projection of the sky onto a 2D drawing surface.
//!
//! The visible hemisphere maps to a disk inscribed in the surface, shrunk by a
//! fixed padding. Distance from the disk center grows linearly with zenith
//! angle:
//!
//! ```text
//! R = min(width, height) / 2 - padding
//! d = R * (90 - altitude) / 90
//! x = cx + d * sin(azimuth)
//! y = cy - d * cos(azimuth)
//! ```
//!
//! so the zenith sits at the center, the horizon on the rim, north straight up
//! and azimuth increasing clockwise (east to the right). Points below the horizon
//! land outside the rim; culling them is the job of [`crate::visibility`].
//!
//! # Examples
//!
//! ```rust
//! use planisphere::coords::HorizontalCoord;
//! use planisphere::projection::Surface;
//!
//! let surface = Surface::new(800.0, 500.0, 30.0)?;
//! assert_eq!(surface.radius(), 220.0);
//!
//! let zenith = surface.project(&HorizontalCoord::zenith());
//! assert_eq!((zenith.x, zenith.y), (400.0, 250.0));
//! # Ok::<(), planisphere::SkyError>(())
//! ```

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

use crate::coords::{HorizontalCoord, SkyPosition};
use crate::error::{Result, SkyError};
use crate::visibility::is_visible;

/// Drawing surface dimensions with the padding kept clear around the sky disk.
///
/// Construction fails for surfaces too small for their padding, so every
/// `Surface` has a strictly positive disk radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    width: f64,
    height: f64,
    padding: f64,
}

/// A projected point together with its horizon visibility
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub position: Point2<f64>,
    pub visible: bool,
}

impl Surface {
    /// Create a surface.
    ///
    /// # Errors
    /// [`SkyError::DegenerateSurface`] when `min(width, height) <= 2 * padding`,
    /// when padding is negative, or when any dimension is not finite.
    pub fn new(width: f64, height: f64, padding: f64) -> Result<Self> {
        let degenerate = || SkyError::DegenerateSurface {
            width,
            height,
            padding,
        };

        if !(width.is_finite() && height.is_finite() && padding.is_finite()) || padding < 0.0 {
            return Err(degenerate());
        }
        if width.min(height) / 2.0 - padding <= 0.0 {
            return Err(degenerate());
        }

        Ok(Self {
            width,
            height,
            padding,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Radius of the horizon circle
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.padding
    }

    /// Surface position of the zenith
    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from the center for a given altitude in degrees
    pub fn altitude_radius(&self, altitude: f64) -> f64 {
        self.radius() * (90.0 - altitude) / 90.0
    }

    /// Point at `distance` from the center along `azimuth` degrees
    pub fn polar_point(&self, azimuth: f64, distance: f64) -> Point2<f64> {
        let az = azimuth.to_radians();
        self.center() + Vector2::new(az.sin(), -az.cos()) * distance
    }

    /// Project a sky position onto the surface
    pub fn project<T: SkyPosition + ?Sized>(&self, point: &T) -> Point2<f64> {
        self.polar_point(point.azimuth(), self.altitude_radius(point.altitude()))
    }

    /// Project and tag with horizon visibility
    pub fn project_with_visibility<T: SkyPosition + ?Sized>(&self, point: &T) -> ProjectedPoint {
        ProjectedPoint {
            position: self.project(point),
            visible: is_visible(point),
        }
    }
}

/// Project `point` onto a surface built from raw dimensions.
///
/// Convenience for one-off projections; prefer holding a [`Surface`] when
/// projecting many points.
pub fn project(
    point: HorizontalCoord,
    surface_width: f64,
    surface_height: f64,
    padding: f64,
) -> Result<Point2<f64>> {
    let surface = Surface::new(surface_width, surface_height, padding)?;
    Ok(surface.project(&point))
}
