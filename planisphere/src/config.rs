//! Tunable parameters for field generation, constellation assembly and scene styling.
//!
//! All values have defaults reproducing the stock sky; a JSON file written by
//! [`SkyConfig::save_to_file`] can override any of them.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::Path;

use crate::constellation::ConstellationDef;
use crate::error::{Result, SkyError};

/// Largest procedural body count a config may request
pub const MAX_BODY_COUNT: usize = 1_000_000;

/// Hours of the observer's day that count as night.
///
/// Both bounds are inclusive whole hours and the window may wrap past midnight,
/// so the default `18..=6` covers 18:00 through 06:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl NightWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether `hour` falls inside the window
    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            (self.start_hour..=self.end_hour).contains(&hour)
        } else {
            hour >= self.start_hour || hour <= self.end_hour
        }
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::new(18, 6)
    }
}

/// Parameters of the seeded field generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of procedural bodies per frame (named stars are appended on top)
    pub body_count: usize,
    pub night_window: NightWindow,
    /// Daytime altitude compression factor
    pub day_altitude_scale: f64,
    /// Daytime altitude offset in degrees, applied after scaling
    pub day_altitude_offset_deg: f64,
    /// Magnitude range of procedural bodies
    pub procedural_magnitude: Range<f64>,
    /// Altitude band, in degrees, where named reference stars are placed
    pub named_altitude_band: Range<f64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            body_count: 200,
            night_window: NightWindow::default(),
            day_altitude_scale: 0.7,
            day_altitude_offset_deg: -20.0,
            procedural_magnitude: 1.0..6.0,
            named_altitude_band: 30.0..80.0,
        }
    }
}

/// How bodies, constellations and guides are turned into draw instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    /// Faintest magnitude that still gets a non-minimal point
    pub magnitude_limit: f64,
    /// Point radius for a magnitude-zero star before the brightness factor
    pub radius_scale: f64,
    pub brightness: f64,
    pub min_point_radius: f64,
    /// Stars brighter (lower) than this get a glow halo
    pub glow_magnitude: f64,
    /// Glow radius as a multiple of the point radius
    pub glow_factor: f64,
    /// Altitudes, in degrees, of the reference rings drawn inside the horizon
    pub altitude_rings: Vec<f64>,
    /// Distance outside the horizon rim for N/E/S/W labels
    pub cardinal_offset: f64,
    pub show_guides: bool,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            magnitude_limit: 6.0,
            radius_scale: 3.0,
            brightness: 0.8,
            min_point_radius: 1.0,
            glow_magnitude: 2.0,
            glow_factor: 3.0,
            altitude_rings: vec![30.0, 60.0],
            cardinal_offset: 5.0,
            show_guides: true,
        }
    }
}

/// Complete configuration of the sky pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub field: FieldConfig,
    pub constellations: Vec<ConstellationDef>,
    pub style: SceneStyle,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            constellations: ConstellationDef::defaults(),
            style: SceneStyle::default(),
        }
    }
}

impl SkyConfig {
    /// Check that every value leaves the pipeline well defined
    pub fn validate(&self) -> Result<()> {
        let field = &self.field;
        if field.body_count > MAX_BODY_COUNT {
            return Err(SkyError::InvalidConfig(format!(
                "body count {} exceeds the maximum of {MAX_BODY_COUNT}",
                field.body_count
            )));
        }
        if !field.day_altitude_scale.is_finite()
            || field.day_altitude_scale < 0.0
            || !field.day_altitude_offset_deg.is_finite()
        {
            return Err(SkyError::InvalidConfig(format!(
                "daytime altitude transform {} * alt + {} must be finite with a non-negative scale",
                field.day_altitude_scale, field.day_altitude_offset_deg
            )));
        }
        let window = field.night_window;
        if window.start_hour > 23 || window.end_hour > 23 {
            return Err(SkyError::InvalidConfig(format!(
                "night window hours must be in 0..=23, got {}..={}",
                window.start_hour, window.end_hour
            )));
        }
        if field.procedural_magnitude.is_empty() {
            return Err(SkyError::InvalidConfig(format!(
                "procedural magnitude range {:?} is empty",
                field.procedural_magnitude
            )));
        }
        let band = &field.named_altitude_band;
        if band.is_empty() || band.start < -90.0 || band.end > 90.0 {
            return Err(SkyError::InvalidConfig(format!(
                "named altitude band {band:?} must be a non-empty range inside [-90, 90]"
            )));
        }

        let style = &self.style;
        if !(style.magnitude_limit.is_finite() && style.magnitude_limit > 0.0) {
            return Err(SkyError::InvalidConfig(format!(
                "magnitude limit must be positive, got {}",
                style.magnitude_limit
            )));
        }
        for (name, value) in [
            ("radius scale", style.radius_scale),
            ("brightness", style.brightness),
            ("cardinal offset", style.cardinal_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SkyError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !(style.min_point_radius.is_finite() && style.min_point_radius > 0.0)
            || !(style.glow_factor.is_finite() && style.glow_factor >= 1.0)
        {
            return Err(SkyError::InvalidConfig(
                "point radius must be positive and glow factor at least 1".to_string(),
            ));
        }
        if let Some(ring) = style
            .altitude_rings
            .iter()
            .find(|&&alt| !(0.0..90.0).contains(&alt))
        {
            return Err(SkyError::InvalidConfig(format!(
                "altitude ring {ring} must be in [0, 90)"
            )));
        }

        Ok(())
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from JSON file and validate
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: SkyConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!(
            "Loaded sky config from {} ({} constellations)",
            path.display(),
            config.constellations.len()
        );
        Ok(config)
    }
}
