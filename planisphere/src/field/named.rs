//! Bright reference stars appended to every generated field.

/// A named star with a catalogue visual magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceStar {
    pub name: &'static str,
    pub magnitude: f64,
}

impl ReferenceStar {
    const fn new(name: &'static str, magnitude: f64) -> Self {
        Self { name, magnitude }
    }
}

/// Reference stars in the order they are appended to a frame.
///
/// Positions are synthetic; only names and magnitudes come from the real sky.
pub const REFERENCE_STARS: [ReferenceStar; 10] = [
    ReferenceStar::new("Polaris", 2.0),
    ReferenceStar::new("Vega", 0.03),
    ReferenceStar::new("Sirius", -1.46),
    ReferenceStar::new("Betelgeuse", 0.5),
    ReferenceStar::new("Rigel", 0.13),
    ReferenceStar::new("Arcturus", -0.05),
    ReferenceStar::new("Antares", 1.09),
    ReferenceStar::new("Aldebaran", 0.87),
    ReferenceStar::new("Spica", 1.04),
    ReferenceStar::new("Deneb", 1.25),
];

/// Azimuth of the `index`-th reference star: evenly spaced starting at north
pub fn reference_azimuth(index: usize) -> f64 {
    index as f64 / REFERENCE_STARS.len() as f64 * 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_azimuths_evenly_spaced() {
        assert_eq!(reference_azimuth(0), 0.0);
        assert_eq!(reference_azimuth(1), 36.0);
        assert_eq!(reference_azimuth(5), 180.0);
        assert_eq!(reference_azimuth(9), 324.0);
    }

    #[test]
    fn test_sirius_is_brightest() {
        let brightest = REFERENCE_STARS
            .iter()
            .min_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
            .unwrap();
        assert_eq!(brightest.name, "Sirius");
    }
}
