//! End-to-end checks of generation, assembly and composition for a summer
//! evening in New York.

use planisphere::constellation::{assemble, ConstellationDef, SENTINEL_CENTER};
use planisphere::field::REFERENCE_STARS;
use planisphere::visibility::filter_visible;
use planisphere::{
    compose, generate, BodyKind, DrawInstruction, Frame, Guide, Instant, Location, SkyConfig,
    SkyPosition, Surface,
};
use test_helpers::write_json_artifact;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn summer_evening() -> Instant {
    Instant::parse("2024-06-21T22:00:00").unwrap()
}

fn new_york() -> Location {
    Location::new(40.7128, -74.006, Some("New York, USA")).unwrap()
}

#[test]
fn test_new_york_summer_evening() {
    init_logging();
    let bodies = generate(&summer_evening(), &new_york(), 200);
    assert_eq!(bodies.len(), 210);

    // Every reference star is present with its catalogue magnitude
    let named: Vec<_> = bodies.iter().filter(|b| b.kind == BodyKind::Named).collect();
    assert_eq!(named.len(), REFERENCE_STARS.len());
    for star in &REFERENCE_STARS {
        let body = named
            .iter()
            .find(|b| b.name.as_deref() == Some(star.name))
            .unwrap_or_else(|| panic!("{} missing from the field", star.name));
        assert_eq!(body.magnitude, star.magnitude);
    }

    // 22:00 is inside the night window, so no procedural body is pushed below
    let above = bodies[..200].iter().filter(|b| b.altitude >= 0.0).count();
    assert!(above >= 150, "only {above} of 200 procedural bodies above the horizon");

    // Orion takes visible bodies 10..17
    let orion = &assemble(&bodies, &[ConstellationDef::new("Orion", 7, 10)])[0];
    let visible = filter_visible(&bodies).len();
    assert!(visible >= 17, "only {visible} bodies above the horizon");
    assert_eq!(orion.members.len(), 7);
    assert_eq!(orion.lines.len(), 6);
    assert!(orion.center.altitude() > 0.0);
    assert_ne!(orion.center, SENTINEL_CENTER);
}

#[test]
fn test_orion_slice_shrinks_with_the_visible_field() {
    // Only the named band is guaranteed visible with no procedural bodies
    let bodies = generate(&summer_evening(), &new_york(), 0);
    let visible = filter_visible(&bodies).len();
    assert_eq!(visible, REFERENCE_STARS.len());

    let orion = &assemble(&bodies, &[ConstellationDef::new("Orion", 7, 10)])[0];
    assert!(orion.lines.is_empty());
    assert!(orion.members.is_empty());
    assert_eq!(orion.center, SENTINEL_CENTER);

    // In every case the path has one line fewer than its members
    for count in [0usize, 3, 5, 8, 12, 40] {
        let bodies = generate(&summer_evening(), &new_york(), count);
        let visible = filter_visible(&bodies).len();
        let orion = &assemble(&bodies, &[ConstellationDef::new("Orion", 7, 10)])[0];
        let expected = visible.saturating_sub(10).min(7);
        if expected >= 3 {
            assert_eq!(orion.members.len(), expected);
            assert_eq!(orion.lines.len(), expected - 1);
        } else {
            assert!(orion.is_empty());
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let a = generate(&summer_evening(), &new_york(), 200);
    let b = generate(&summer_evening(), &new_york(), 200);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.altitude.to_bits(), y.altitude.to_bits());
        assert_eq!(x.azimuth.to_bits(), y.azimuth.to_bits());
        assert_eq!(x.magnitude.to_bits(), y.magnitude.to_bits());
    }

    // A different site at the same instant gets a different sky
    let london = Location::preset("London").unwrap();
    let c = generate(&summer_evening(), &london, 200);
    assert_ne!(a[..200], c[..200]);
}

#[test]
fn test_frame_references_resolve() {
    let config = SkyConfig::default();
    let frame = Frame::generate(summer_evening(), new_york(), &config);
    frame.validate().unwrap();

    for constellation in &frame.constellations {
        for line in &constellation.lines {
            let (start, end) = frame.line_endpoints(line).unwrap();
            assert!(start.altitude > 0.0 && end.altitude > 0.0);
        }
    }
}

#[test]
fn test_scene_respects_horizon() {
    init_logging();
    let config = SkyConfig::default();
    let frame = Frame::generate(summer_evening(), new_york(), &config);
    let surface = Surface::new(800.0, 500.0, 30.0).unwrap();
    let scene = compose(&frame, &surface, &config.style).unwrap();

    assert_eq!(scene.radius, 220.0);
    assert_eq!(scene.star_count(), frame.visible_count());

    let center = surface.center();
    for star in scene.stars() {
        let distance = (star.position - center).norm();
        assert!(distance < scene.radius + 1e-9, "{} outside the horizon", star.body_id);
        assert!(star.radius >= config.style.min_point_radius);
        assert!((0.0..=1.0).contains(&star.intensity));
    }

    // Segments only join bodies that were themselves drawn
    let drawn: Vec<&str> = scene.stars().map(|s| s.body_id.as_str()).collect();
    for segment in scene.segments() {
        assert!(drawn.contains(&segment.from_id.as_str()));
        assert!(drawn.contains(&segment.to_id.as_str()));
    }

    // Labels only for constellations with geometry and a center above the horizon
    let expected_labels = frame
        .constellations
        .iter()
        .filter(|c| !c.lines.is_empty() && c.center.altitude() > 0.0)
        .count();
    assert_eq!(scene.label_count(), expected_labels);

    let horizon = scene.instructions.iter().find_map(|i| match i {
        DrawInstruction::Guide(Guide::Horizon { radius, .. }) => Some(*radius),
        _ => None,
    });
    assert_eq!(horizon, Some(220.0));

    let artifact = write_json_artifact("night_sky_new_york.json", &scene).unwrap();
    assert!(artifact.exists());
}

#[test]
fn test_daytime_sky_is_mostly_empty() {
    let config = SkyConfig::default();
    let noon = Instant::parse("2024-06-21T12:00:00").unwrap();
    let frame = Frame::generate(noon, new_york(), &config);

    let procedural_visible = frame.bodies[..200]
        .iter()
        .filter(|b| b.altitude > 0.0)
        .count();
    assert!(procedural_visible < 160);

    // Reference stars stay up regardless of the hour
    assert!(frame.bodies[200..].iter().all(|b| b.altitude >= 30.0));
}

#[test]
fn test_reprojection_keeps_scene_shape() {
    let config = SkyConfig::default();
    let frame = Frame::generate(summer_evening(), new_york(), &config);

    let wide = compose(&frame, &Surface::new(800.0, 500.0, 30.0).unwrap(), &config.style).unwrap();
    let square = compose(&frame, &Surface::new(300.0, 300.0, 0.0).unwrap(), &config.style).unwrap();

    assert_eq!(wide.instructions.len(), square.instructions.len());
    assert_eq!(square.radius, 150.0);
}
