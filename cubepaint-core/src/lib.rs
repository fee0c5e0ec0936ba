/// CubePaint Core Library - Shared geometry, ordering and rasterization logic
///
/// This library renders a single box with a fixed pipeline: build the vertices,
/// rotate and project them, sort the faces back to front and emit filled
/// polygons for a canvas to draw.

pub mod canvas;
pub mod emitter;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod point;
pub mod projection;
pub mod render;
pub mod transform;
pub mod visibility;

// Re-export commonly used types
pub use canvas::{Canvas, PixmapCanvas};
pub use emitter::DrawInstruction;
pub use encode::{encode_png, render_png, EncodedImage, PNG_CONTENT_TYPE};
pub use error::{CanvasError, ConfigError, Error, Result};
pub use geometry::{CubeGeometry, Face, Rgb};
pub use point::PointOps;
pub use projection::Projection;
pub use render::{render_cube, Frame, RenderParams};
pub use transform::Orientation;
pub use nalgebra::{Point2, Point3};
