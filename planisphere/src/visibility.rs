//! Horizon culling rules.
//!
//! A point is visible strictly above the horizon. Lines need both endpoints
//! visible and are never clipped; constellation labels additionally require the
//! constellation to have geometry.

use crate::constellation::{Constellation, ConstellationLine};
use crate::coords::SkyPosition;
use crate::field::CelestialBody;

/// Visible iff altitude > 0
pub fn is_visible<T: SkyPosition + ?Sized>(point: &T) -> bool {
    point.altitude() > 0.0
}

/// Whether a line may be drawn: both endpoints must exist in `bodies` and be visible
pub fn is_line_visible(bodies: &[CelestialBody], line: &ConstellationLine) -> bool {
    match (bodies.get(line.start), bodies.get(line.end)) {
        (Some(start), Some(end)) => is_visible(start) && is_visible(end),
        _ => false,
    }
}

/// Whether a constellation's name may be placed at its center
pub fn is_label_eligible(constellation: &Constellation) -> bool {
    is_visible(&constellation.center) && !constellation.lines.is_empty()
}

/// References to the visible points of `points`, in order
pub fn filter_visible<T: SkyPosition>(points: &[T]) -> Vec<&T> {
    points.iter().filter(|p| is_visible(*p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellation::SENTINEL_CENTER;
    use crate::coords::HorizontalCoord;
    use crate::field::BodyKind;

    fn body(altitude: f64) -> CelestialBody {
        CelestialBody {
            id: "star-x".to_string(),
            name: None,
            magnitude: 2.0,
            altitude,
            azimuth: 45.0,
            kind: BodyKind::Procedural,
        }
    }

    #[test]
    fn test_horizon_is_exclusive() {
        assert!(!is_visible(&body(0.0)));
        assert!(!is_visible(&body(-0.001)));
        assert!(!is_visible(&body(-90.0)));
        assert!(is_visible(&body(1e-9)));
        assert!(is_visible(&body(90.0)));
    }

    #[test]
    fn test_line_needs_both_endpoints() {
        let bodies = vec![body(10.0), body(20.0), body(-3.0)];
        assert!(is_line_visible(&bodies, &ConstellationLine { start: 0, end: 1 }));
        assert!(!is_line_visible(&bodies, &ConstellationLine { start: 1, end: 2 }));
        assert!(!is_line_visible(&bodies, &ConstellationLine { start: 2, end: 0 }));
        // Dangling endpoints are never drawn
        assert!(!is_line_visible(&bodies, &ConstellationLine { start: 0, end: 7 }));
    }

    #[test]
    fn test_label_eligibility() {
        let empty = Constellation::empty("Nothing");
        assert!(!is_label_eligible(&empty));

        let mut low = Constellation {
            name: "Low".to_string(),
            members: vec![0, 1],
            lines: vec![ConstellationLine { start: 0, end: 1 }],
            center: HorizontalCoord::new(0.0, 100.0),
        };
        assert!(!is_label_eligible(&low));

        low.center.altitude = 12.0;
        assert!(is_label_eligible(&low));

        // Positive center without lines is still ineligible
        let bare = Constellation {
            center: HorizontalCoord::new(45.0, 0.0),
            ..Constellation::empty("Bare")
        };
        assert!(!is_label_eligible(&bare));
        assert!(SENTINEL_CENTER.altitude < 0.0);
    }

    #[test]
    fn test_filter_visible_preserves_order() {
        let bodies = vec![body(5.0), body(-1.0), body(0.0), body(30.0)];
        let visible = filter_visible(&bodies);
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].altitude, 5.0);
        assert_eq!(visible[1].altitude, 30.0);
    }
}
