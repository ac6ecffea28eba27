//! One complete, internally consistent snapshot of the sky.

use serde::{Deserialize, Serialize};

use crate::config::SkyConfig;
use crate::constellation::{assemble, Constellation, ConstellationLine};
use crate::error::{Result, SkyError};
use crate::field::{generate_with_config, CelestialBody};
use crate::observer::{Instant, Location};

/// Generated bodies and the constellations built from them for one `(time, location)`.
///
/// A frame is never patched: any input change produces a new frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub bodies: Vec<CelestialBody>,
    pub constellations: Vec<Constellation>,
    pub time: Instant,
    pub location: Location,
}

impl Frame {
    /// Run the generator and assembler for one observation
    pub fn generate(time: Instant, location: Location, config: &SkyConfig) -> Self {
        let bodies = generate_with_config(&time, &location, config.field.body_count, &config.field);
        let constellations = assemble(&bodies, &config.constellations);

        log::debug!(
            "Frame for {} at {}: {} bodies, {} of {} constellations drawable",
            location.name,
            time,
            bodies.len(),
            constellations.iter().filter(|c| !c.is_empty()).count(),
            constellations.len()
        );

        Self {
            bodies,
            constellations,
            time,
            location,
        }
    }

    pub fn body(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    /// Resolve both endpoints of a line
    pub fn line_endpoints(&self, line: &ConstellationLine) -> Option<(&CelestialBody, &CelestialBody)> {
        Some((self.body(line.start)?, self.body(line.end)?))
    }

    /// Number of bodies strictly above the horizon
    pub fn visible_count(&self) -> usize {
        crate::visibility::filter_visible(&self.bodies).len()
    }

    /// Check that every constellation only refers to bodies of this frame
    pub fn validate(&self) -> Result<()> {
        let body_count = self.bodies.len();
        for constellation in &self.constellations {
            if let Some(index) = constellation.referenced_indices().find(|&i| i >= body_count) {
                return Err(SkyError::DanglingReference {
                    constellation: constellation.name.clone(),
                    index,
                    body_count,
                });
            }
        }
        Ok(())
    }
}
