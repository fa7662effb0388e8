use std::{io, path::PathBuf};
use thiserror::Error;

/// scenario values the model refuses to work with
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    #[error("speed must be a positive finite number of feet per second, got {0}")]
    Speed(f64),
    #[error("distance must be a non-negative finite number of feet, got {0}")]
    Distance(f64),
    #[error("rain density must be a positive finite number of drops per square foot per second, got {0}")]
    RainDensity(f64),
    #[error("wetness overflows at {speed} ft/s over {distance} ft with {rain_density} drops/ft²/s")]
    Overflow {
        speed: f64,
        distance: f64,
        rain_density: f64,
    },
}

/// series the chart cannot be drawn from
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ChartError {
    #[error("chart series differ in length: {speeds} speeds against {wetness} wetness values")]
    Misaligned { speeds: usize, wetness: usize },
    #[error("chart has no points to draw")]
    Empty,
    #[error("chart point {index} is not a finite number")]
    NonFinite { index: usize },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot write chart to {path}: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("invalid chart: {0}")]
    InvalidChart(#[from] ChartError),
    #[error("rendering unavailable: {0}")]
    RenderingUnavailable(#[from] RenderError),
}
