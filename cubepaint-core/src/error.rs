/// Error types for rendering, rasterization and encoding
use thiserror::Error;

/// Rejected render parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("cube {name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f64 },

    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("vertex {vertex} sits on the viewer plane (viewer distance + z = {denominator})")]
    DegenerateProjection { vertex: usize, denominator: f64 },
}

/// Failures while drawing onto a canvas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    #[error("cannot allocate a {width}x{height} canvas")]
    Allocation { width: u32, height: u32 },

    #[error("viewport {width}x{height} is not a whole pixel size")]
    FractionalSize { width: f64, height: f64 },

    #[error("polygon has no valid outline: {points:?}")]
    InvalidPolygon { points: [(f64, f64); 4] },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid render parameters: {0}")]
    Config(#[from] ConfigError),

    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
