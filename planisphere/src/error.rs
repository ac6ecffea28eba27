//! Error types shared by every stage of the sky pipeline.

use thiserror::Error;

/// Errors that can occur while building or rendering a sky frame
#[derive(Error, Debug)]
pub enum SkyError {
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("Invalid observation time: {0}")]
    InvalidInstant(String),

    #[error("Surface {width}x{height} leaves no drawable radius with padding {padding}")]
    DegenerateSurface {
        width: f64,
        height: f64,
        padding: f64,
    },

    #[error(
        "Constellation '{constellation}' references body {index} but the frame holds {body_count} bodies"
    )]
    DanglingReference {
        constellation: String,
        index: usize,
        body_count: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No preset location matches '{0}'")]
    UnknownPreset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SkyError>;
