//! Observer inputs: where the sky is seen from and when.
//!
//! Both types are immutable snapshots handed to the generator by value. Range
//! checks happen here, at construction, so the rest of the pipeline can treat
//! its inputs as well-formed.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SkyError};

/// Geographic position of the observer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees north of the equator, in [-90, 90]
    pub latitude: f64,
    /// Degrees east of Greenwich, in [-180, 180]
    pub longitude: f64,
    /// Human readable site name
    pub name: String,
}

// Well-known observing sites offered to users who don't want to type coordinates
const PRESETS: [(&str, f64, f64); 16] = [
    ("New York, USA", 40.7128, -74.006),
    ("London, UK", 51.5074, -0.1278),
    ("Tokyo, Japan", 35.6762, 139.6503),
    ("Sydney, Australia", -33.8688, 151.2093),
    ("Paris, France", 48.8566, 2.3522),
    ("Moscow, Russia", 55.7558, 37.6173),
    ("Rio de Janeiro, Brazil", -22.9068, -43.1729),
    ("San Francisco, USA", 37.7749, -122.4194),
    ("Rome, Italy", 41.9028, 12.4964),
    ("Berlin, Germany", 52.52, 13.405),
    ("Dubai, UAE", 25.2048, 55.2708),
    ("Singapore", 1.3521, 103.8198),
    ("Mexico City, Mexico", 19.4326, -99.1332),
    ("Buenos Aires, Argentina", -34.6037, -58.3816),
    ("Stockholm, Sweden", 59.3293, 18.0686),
    ("Cairo, Egypt", 30.0444, 31.2357),
];

impl Location {
    /// Create a validated location.
    ///
    /// A missing or blank name is replaced by the coordinates formatted to four
    /// decimal places, e.g. `"40.7128, -74.0060"`.
    ///
    /// # Errors
    /// Returns [`SkyError::LatitudeOutOfRange`] or [`SkyError::LongitudeOutOfRange`]
    /// when a coordinate is outside its range or is not a finite number.
    pub fn new(latitude: f64, longitude: f64, name: Option<&str>) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SkyError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SkyError::LongitudeOutOfRange(longitude));
        }

        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("{latitude:.4}, {longitude:.4}"),
        };

        Ok(Self {
            latitude,
            longitude,
            name,
        })
    }

    /// All preset observing sites in definition order
    pub fn presets() -> Vec<Location> {
        PRESETS
            .iter()
            .map(|&(name, latitude, longitude)| Location {
                latitude,
                longitude,
                name: name.to_string(),
            })
            .collect()
    }

    /// Look up a preset by name.
    ///
    /// An exact (case-insensitive) name match wins; otherwise the first preset
    /// whose name contains the query is returned.
    pub fn preset(name: &str) -> Result<Location> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(SkyError::UnknownPreset(name.to_string()));
        }
        let presets = Self::presets();

        if let Some(exact) = presets.iter().find(|p| p.name.to_lowercase() == needle) {
            return Ok(exact.clone());
        }

        search_presets(name)
            .into_iter()
            .next()
            .ok_or_else(|| SkyError::UnknownPreset(name.to_string()))
    }
}

/// Presets whose name contains `query`, ignoring case. An empty query matches everything.
pub fn search_presets(query: &str) -> Vec<Location> {
    let needle = query.trim().to_lowercase();
    Location::presets()
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({:.4}, {:.4})",
            self.name, self.latitude, self.longitude
        )
    }
}

/// Observation time as read off the observer's wall clock.
///
/// No timezone conversion is applied: the hour used for the night window is the
/// hour the observer entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant(NaiveDateTime);

const INSTANT_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

impl Instant {
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        // Sub-second components don't participate in seeding
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    /// Parse `YYYY-MM-DDTHH:MM[:SS]` or the same with a space instead of `T`
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        INSTANT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::from_datetime)
            .ok_or_else(|| SkyError::InvalidInstant(s.to_string()))
    }

    /// The current local wall-clock time
    pub fn now() -> Self {
        Self::from_datetime(chrono::Local::now().naive_local())
    }

    /// Milliseconds since the Unix epoch, treating the wall clock as UTC
    pub fn epoch_millis(&self) -> i64 {
        self.0.and_utc().timestamp_millis()
    }

    /// Hour of day in [0, 23]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_datetime(datetime)
    }
}

impl std::str::FromStr for Instant {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_rejects_out_of_range() {
        assert!(matches!(
            Location::new(90.5, 0.0, None),
            Err(SkyError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Location::new(0.0, -180.1, None),
            Err(SkyError::LongitudeOutOfRange(_))
        ));
        assert!(matches!(
            Location::new(f64::NAN, 0.0, None),
            Err(SkyError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_location_default_name() {
        let loc = Location::new(40.7128, -74.006, Some("   ")).unwrap();
        assert_eq!(loc.name, "40.7128, -74.0060");

        let named = Location::new(40.7128, -74.006, Some(" New York ")).unwrap();
        assert_eq!(named.name, "New York");
    }

    #[test]
    fn test_location_accepts_boundaries() {
        assert!(Location::new(-90.0, 180.0, None).is_ok());
        assert!(Location::new(90.0, -180.0, None).is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Location::presets().len(), 16);

        let london = Location::preset("london, uk").unwrap();
        assert_eq!(london.latitude, 51.5074);

        let tokyo = Location::preset("tok").unwrap();
        assert_eq!(tokyo.name, "Tokyo, Japan");

        assert!(matches!(
            Location::preset("Atlantis"),
            Err(SkyError::UnknownPreset(_))
        ));
        // A blank name would otherwise match every site
        for blank in ["", "   "] {
            assert!(matches!(
                Location::preset(blank),
                Err(SkyError::UnknownPreset(_))
            ));
        }
    }

    #[test]
    fn test_search_presets() {
        let usa = search_presets("usa");
        assert_eq!(usa.len(), 2);
        assert_eq!(usa[0].name, "New York, USA");
        assert_eq!(usa[1].name, "San Francisco, USA");

        assert_eq!(search_presets("").len(), 16);
    }

    #[test]
    fn test_instant_parse_formats() {
        let a = Instant::parse("2024-06-21T22:00:00").unwrap();
        let b = Instant::parse("2024-06-21 22:00").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour(), 22);
        assert_eq!(a.to_string(), "2024-06-21T22:00:00");

        assert!(matches!(
            Instant::parse("yesterday"),
            Err(SkyError::InvalidInstant(_))
        ));
    }

    #[test]
    fn test_instant_epoch_millis() {
        let epoch = Instant::parse("1970-01-01T00:00:01").unwrap();
        assert_eq!(epoch.epoch_millis(), 1000);
    }
}
