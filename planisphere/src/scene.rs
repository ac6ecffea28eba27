use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::config::SceneStyle;
use crate::error::Result;
use crate::field::CelestialBody;
use crate::frame::Frame;
use crate::projection::{ProjectedPoint, Surface};
use crate::visibility::{is_label_eligible, is_line_visible};

/// A star point to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarMark {
    pub body_id: String,
    pub position: Point2<f64>,
    /// Point radius in surface units, larger for brighter stars
    pub radius: f64,
    /// Relative brightness in [0, 1]
    pub intensity: f64,
    /// Halo radius for stars bright enough to glow
    pub glow_radius: Option<f64>,
    /// Name to print beside the star
    pub label: Option<String>,
}

/// A constellation edge between two visible stars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub constellation: String,
    pub from_id: String,
    pub to_id: String,
    pub from: Point2<f64>,
    pub to: Point2<f64>,
}

/// Orientation aids drawn around and inside the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Guide {
    Horizon {
        center: Point2<f64>,
        radius: f64,
    },
    AltitudeRing {
        altitude: f64,
        radius: f64,
        label_anchor: Point2<f64>,
    },
    Cardinal {
        direction: char,
        anchor: Point2<f64>,
    },
}

/// One element of a renderable scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawInstruction {
    Star(StarMark),
    Segment(Segment),
    ConstellationLabel { name: String, position: Point2<f64> },
    Guide(Guide),
}

/// Everything the renderer needs to paint one frame at one surface size.
///
/// Instructions are ordered: stars in frame order, then each constellation's
/// segments followed by its label, then guides. Nothing below the horizon and
/// nothing referring outside the frame ever appears in the list.
///
/// # Example Usage
///
/// ```rust
/// use planisphere::{compose, Frame, Instant, Location, SceneStyle, SkyConfig, Surface};
///
/// let config = SkyConfig::default();
/// let frame = Frame::generate(
///     Instant::parse("2024-06-21T22:00:00")?,
///     Location::new(40.7128, -74.006, Some("New York, USA"))?,
///     &config,
/// );
///
/// let surface = Surface::new(800.0, 500.0, 30.0)?;
/// let scene = compose(&frame, &surface, &config.style)?;
///
/// println!(
///     "{} stars, {} segments, {} labels on a {}x{} surface",
///     scene.star_count(),
///     scene.segment_count(),
///     scene.label_count(),
///     scene.width,
///     scene.height
/// );
///
/// // Re-projecting the same frame at another size needs no regeneration
/// let small = compose(&frame, &Surface::new(300.0, 300.0, 10.0)?, &SceneStyle::default())?;
/// assert_eq!(small.star_count(), scene.star_count());
/// # Ok::<(), planisphere::SkyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableScene {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Horizon radius
    pub radius: f64,
    pub instructions: Vec<DrawInstruction>,
}

impl RenderableScene {
    pub fn stars(&self) -> impl Iterator<Item = &StarMark> {
        self.instructions.iter().filter_map(|i| match i {
            DrawInstruction::Star(star) => Some(star),
            _ => None,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.instructions.iter().filter_map(|i| match i {
            DrawInstruction::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    pub fn star_count(&self) -> usize {
        self.stars().count()
    }

    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Number of constellation labels
    pub fn label_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, DrawInstruction::ConstellationLabel { .. }))
            .count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Point radius for a magnitude: inverse-linear, never below the style minimum
pub fn point_radius(magnitude: f64, style: &SceneStyle) -> f64 {
    let scaled = style.radius_scale * style.brightness * (style.magnitude_limit - magnitude)
        / style.magnitude_limit;
    scaled.max(style.min_point_radius)
}

/// Relative brightness in [0, 1], 1 at magnitude zero or brighter
pub fn intensity(magnitude: f64, style: &SceneStyle) -> f64 {
    ((style.magnitude_limit - magnitude) / style.magnitude_limit).clamp(0.0, 1.0)
}

fn star_mark(body: &CelestialBody, position: Point2<f64>, style: &SceneStyle) -> StarMark {
    let radius = point_radius(body.magnitude, style);
    StarMark {
        body_id: body.id.clone(),
        position,
        radius,
        intensity: intensity(body.magnitude, style),
        glow_radius: (body.magnitude < style.glow_magnitude).then(|| radius * style.glow_factor),
        label: body.name.clone(),
    }
}

fn guides(surface: &Surface, style: &SceneStyle) -> Vec<Guide> {
    let mut guides = vec![Guide::Horizon {
        center: surface.center(),
        radius: surface.radius(),
    }];

    for &altitude in &style.altitude_rings {
        let radius = surface.altitude_radius(altitude);
        guides.push(Guide::AltitudeRing {
            altitude,
            radius,
            label_anchor: surface.polar_point(90.0, radius),
        });
    }

    let rim = surface.radius() + style.cardinal_offset;
    for (direction, azimuth) in [('N', 0.0), ('E', 90.0), ('S', 180.0), ('W', 270.0)] {
        guides.push(Guide::Cardinal {
            direction,
            anchor: surface.polar_point(azimuth, rim),
        });
    }

    guides
}

/// Turn a frame into draw instructions for one surface.
///
/// The frame's referential integrity is checked first; a frame with dangling
/// constellation references yields an error and no scene.
pub fn compose(frame: &Frame, surface: &Surface, style: &SceneStyle) -> Result<RenderableScene> {
    frame.validate()?;

    let mut instructions: Vec<DrawInstruction> = frame
        .bodies
        .iter()
        .filter_map(|body| match surface.project_with_visibility(body) {
            ProjectedPoint {
                position,
                visible: true,
            } => Some(DrawInstruction::Star(star_mark(body, position, style))),
            _ => None,
        })
        .collect();

    for constellation in &frame.constellations {
        for line in &constellation.lines {
            if !is_line_visible(&frame.bodies, line) {
                continue;
            }
            // Endpoints exist: validated above and checked by is_line_visible
            if let Some((start, end)) = frame.line_endpoints(line) {
                instructions.push(DrawInstruction::Segment(Segment {
                    constellation: constellation.name.clone(),
                    from_id: start.id.clone(),
                    to_id: end.id.clone(),
                    from: surface.project(start),
                    to: surface.project(end),
                }));
            }
        }

        if is_label_eligible(constellation) {
            instructions.push(DrawInstruction::ConstellationLabel {
                name: constellation.name.clone(),
                position: surface.project(&constellation.center),
            });
        }
    }

    if style.show_guides {
        instructions.extend(guides(surface, style).into_iter().map(DrawInstruction::Guide));
    }

    let scene = RenderableScene {
        width: surface.width(),
        height: surface.height(),
        padding: surface.padding(),
        radius: surface.radius(),
        instructions,
    };

    log::debug!(
        "Composed {} instructions ({} stars, {} segments, {} labels)",
        scene.instructions.len(),
        scene.star_count(),
        scene.segment_count(),
        scene.label_count()
    );

    Ok(scene)
}
