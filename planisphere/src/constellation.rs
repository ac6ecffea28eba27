//! Assembly of constellations out of the visible part of a generated field.
//!
//! Membership is positional: a definition takes a contiguous run of the
//! *visible* bodies (altitude above the horizon) and joins consecutive members
//! into a simple path. Lines reference bodies by their index in the slice handed
//! to [`assemble`], which for a [`crate::Frame`] is the frame's body list.

use serde::{Deserialize, Serialize};

use crate::coords::HorizontalCoord;
use crate::field::CelestialBody;
use crate::visibility::is_visible;

/// Minimum number of visible members for a constellation to be drawn
pub const MIN_CONSTELLATION_STARS: usize = 3;

/// Center assigned to constellations that could not be assembled.
///
/// It sits below the horizon so label placement skips it like any other
/// invisible point.
pub const SENTINEL_CENTER: HorizontalCoord = HorizontalCoord {
    altitude: -10.0,
    azimuth: 0.0,
};

/// Recipe for one constellation: `star_count` visible bodies starting at `start_index`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationDef {
    pub name: String,
    pub star_count: usize,
    pub start_index: usize,
}

impl ConstellationDef {
    pub fn new(name: &str, star_count: usize, start_index: usize) -> Self {
        Self {
            name: name.to_string(),
            star_count,
            start_index,
        }
    }

    /// The stock set of constellations
    pub fn defaults() -> Vec<ConstellationDef> {
        vec![
            ConstellationDef::new("Ursa Major", 7, 0),
            ConstellationDef::new("Orion", 7, 10),
            ConstellationDef::new("Cassiopeia", 5, 20),
            ConstellationDef::new("Cygnus", 5, 30),
            ConstellationDef::new("Lyra", 4, 40),
        ]
    }
}

/// An edge of a constellation's line graph, as indices into the frame's bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstellationLine {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub name: String,
    /// Member bodies in path order, as indices into the frame's bodies
    pub members: Vec<usize>,
    pub lines: Vec<ConstellationLine>,
    /// Mean altitude and mean azimuth of the members.
    ///
    /// The azimuth mean is arithmetic, so a constellation straddling north
    /// (e.g. members at 350° and 10°) gets a center near 180°.
    pub center: HorizontalCoord,
}

impl Constellation {
    /// A constellation with no geometry, centered below the horizon
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
            lines: Vec::new(),
            center: SENTINEL_CENTER,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Every body index this constellation refers to, members and line endpoints alike
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .copied()
            .chain(self.lines.iter().flat_map(|l| [l.start, l.end]))
    }
}

/// Build one constellation per definition from the visible bodies of `bodies`.
///
/// Definitions whose slice holds fewer than [`MIN_CONSTELLATION_STARS`] visible
/// bodies come back as [`Constellation::empty`]. Output order follows `defs`.
pub fn assemble(bodies: &[CelestialBody], defs: &[ConstellationDef]) -> Vec<Constellation> {
    let visible: Vec<usize> = bodies
        .iter()
        .enumerate()
        .filter(|(_, body)| is_visible(*body))
        .map(|(index, _)| index)
        .collect();

    defs.iter()
        .map(|def| assemble_one(bodies, &visible, def))
        .collect()
}

fn assemble_one(bodies: &[CelestialBody], visible: &[usize], def: &ConstellationDef) -> Constellation {
    let start = def.start_index.min(visible.len());
    let end = def.start_index.saturating_add(def.star_count).min(visible.len());
    let members = &visible[start..end];

    if members.len() < MIN_CONSTELLATION_STARS {
        log::warn!(
            "Constellation '{}' has {} visible stars at index {}, leaving it empty",
            def.name,
            members.len(),
            def.start_index
        );
        return Constellation::empty(&def.name);
    }

    let lines = members
        .windows(2)
        .map(|pair| ConstellationLine {
            start: pair[0],
            end: pair[1],
        })
        .collect();

    let n = members.len() as f64;
    let altitude = members.iter().map(|&i| bodies[i].altitude).sum::<f64>() / n;
    let azimuth = members.iter().map(|&i| bodies[i].azimuth).sum::<f64>() / n;

    Constellation {
        name: def.name.clone(),
        members: members.to_vec(),
        lines,
        center: HorizontalCoord::new(altitude, azimuth),
    }
}
