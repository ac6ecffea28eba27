use crate::config::SkyConfig;
use crate::error::SkyError;
use crate::observer::{Instant, Location};
use crate::projection::Surface;
use clap::Parser;
use std::path::PathBuf;

/// Parse a location string in format "latitude,longitude"
fn parse_location(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err("Location must be in format 'latitude,longitude'".to_string());
    }

    let latitude = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid latitude value".to_string())?;
    let longitude = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid longitude value".to_string())?;

    // Range-check now so clap reports it against the flag
    Location::new(latitude, longitude, None).map_err(|e| format!("Invalid location: {}", e))?;

    Ok((latitude, longitude))
}

/// Parse an observation time such as "2024-06-21T22:00:00"
fn parse_instant(s: &str) -> Result<Instant, String> {
    Instant::parse(s).map_err(|e| e.to_string())
}

/// New York, the default observing site
const DEFAULT_LOCATION: &str = "40.7128,-74.006";

/// Observation and surface arguments shared by the sky binaries
#[derive(Parser, Debug, Clone)]
pub struct SharedSkyArgs {
    /// Observer position (format: "latitude,longitude" in degrees)
    #[arg(long, default_value = DEFAULT_LOCATION, value_parser = parse_location, allow_hyphen_values = true)]
    pub location: (f64, f64),

    /// Display name for the observer position
    #[arg(long)]
    pub name: Option<String>,

    /// Use a preset observing site instead of --location (e.g. "Tokyo")
    #[arg(long, conflicts_with = "location")]
    pub preset: Option<String>,

    /// Observation time (e.g. "2024-06-21T22:00:00"), defaults to now
    #[arg(long, value_parser = parse_instant)]
    pub time: Option<Instant>,

    /// Surface width
    #[arg(long, default_value_t = 800.0)]
    pub width: f64,

    /// Surface height
    #[arg(long, default_value_t = 500.0)]
    pub height: f64,

    /// Clear margin between the horizon circle and the surface edge
    #[arg(long, default_value_t = 30.0)]
    pub padding: f64,

    /// Number of procedural stars, overriding the config file
    #[arg(long)]
    pub count: Option<usize>,

    /// Path to a JSON sky configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl SharedSkyArgs {
    /// Resolve the preset or explicit coordinates into a location
    pub fn observer_location(&self) -> Result<Location, SkyError> {
        match &self.preset {
            Some(preset) => Location::preset(preset),
            None => {
                let (latitude, longitude) = self.location;
                Location::new(latitude, longitude, self.name.as_deref())
            }
        }
    }

    pub fn observation_time(&self) -> Instant {
        self.time.unwrap_or_else(Instant::now)
    }

    pub fn surface(&self) -> Result<Surface, SkyError> {
        Surface::new(self.width, self.height, self.padding)
    }

    /// Load the configured sky config and apply command line overrides
    pub fn sky_config(&self) -> Result<SkyConfig, SkyError> {
        let mut config = load_config(self.config.as_ref(), self.debug)?;
        if let Some(count) = self.count {
            config.field.body_count = count;
            config.validate()?;
        }
        Ok(config)
    }
}

/// Load a sky configuration from the specified path, or the defaults when absent
///
/// # Example
/// ```no_run
/// use planisphere::shared_args::load_config;
/// use std::path::PathBuf;
///
/// let config_path = PathBuf::from("sky.json");
/// let config = load_config(Some(&config_path), true)?;
/// # Ok::<(), planisphere::SkyError>(())
/// ```
pub fn load_config(config_path: Option<&PathBuf>, debug: bool) -> Result<SkyConfig, SkyError> {
    let Some(path) = config_path else {
        return Ok(SkyConfig::default());
    };

    if debug {
        println!("Loading sky config from: {}", path.display());
    }

    let config = SkyConfig::load_from_file(path)?;

    if debug {
        println!(
            "Loaded config: {} stars, {} constellations",
            config.field.body_count,
            config.constellations.len()
        );
    }

    Ok(config)
}
