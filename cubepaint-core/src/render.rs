/// The render entry point: parameters in, ordered draw instructions out
use log::{debug, info, warn};

use crate::canvas::Canvas;
use crate::emitter::{emit_polygons, DrawInstruction};
use crate::error::ConfigError;
use crate::geometry::CubeGeometry;
use crate::projection::Projection;
use crate::transform::{transform_vertices, Orientation};
use crate::visibility::sort_back_to_front;

/// Smallest accepted magnitude of `viewer_distance + z`
pub const MIN_DEPTH_DENOMINATOR: f64 = 1e-9;

/// Everything that determines a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub cube_width: f64,
    pub cube_height: f64,
    pub cube_depth: f64,
    pub orientation: Orientation,
    pub projection: Projection,
}

impl RenderParams {
    pub const DEFAULT_CUBE_WIDTH: f64 = 5.0;
    pub const DEFAULT_CUBE_HEIGHT: f64 = 2.0;
    pub const DEFAULT_CUBE_DEPTH: f64 = 4.0;

    pub fn with_cube_size(mut self, width: f64, height: f64, depth: f64) -> Self {
        self.cube_width = width;
        self.cube_height = height;
        self.cube_depth = depth;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    fn named_values(&self) -> [(&'static str, f64); 10] {
        [
            ("cube_width", self.cube_width),
            ("cube_height", self.cube_height),
            ("cube_depth", self.cube_depth),
            ("angle_x", self.orientation.x),
            ("angle_y", self.orientation.y),
            ("angle_z", self.orientation.z),
            ("view_width", self.projection.view_width),
            ("view_height", self.projection.view_height),
            ("field_of_view", self.projection.field_of_view),
            ("viewer_distance", self.projection.viewer_distance),
        ]
    }

    /// Check the parameters that can be judged without transforming vertices
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, value)) = self.named_values().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { name, value });
        }

        for (name, value) in [
            ("width", self.cube_width),
            ("height", self.cube_height),
            ("depth", self.cube_depth),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }

        let Projection {
            view_width,
            view_height,
            ..
        } = self.projection;
        if view_width <= 0.0 || view_height <= 0.0 {
            return Err(ConfigError::InvalidViewport {
                width: view_width,
                height: view_height,
            });
        }

        Ok(())
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            cube_width: Self::DEFAULT_CUBE_WIDTH,
            cube_height: Self::DEFAULT_CUBE_HEIGHT,
            cube_depth: Self::DEFAULT_CUBE_DEPTH,
            orientation: Orientation::default(),
            projection: Projection::default(),
        }
    }
}

/// The draw instructions for one image, farthest face first
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub instructions: Vec<DrawInstruction>,
}

impl Frame {
    /// Replay every instruction onto `canvas` in order
    pub fn paint<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        for instruction in &self.instructions {
            canvas.fill_polygon(&instruction.polygon, instruction.color)?;
        }
        Ok(())
    }
}

/// Build, rotate, project and depth-sort the cube.
pub fn render_cube(params: &RenderParams) -> Result<Frame, ConfigError> {
    if let Err(err) = params.validate() {
        warn!("rejecting render parameters: {}", err);
        return Err(err);
    }

    let geometry = CubeGeometry::new(params.cube_width, params.cube_height, params.cube_depth);
    let transformed = transform_vertices(&geometry.vertices, &params.orientation, &params.projection);

    for (vertex, point) in transformed.iter().enumerate() {
        let denominator = params.projection.depth_denominator(point.z);
        if denominator.abs() < MIN_DEPTH_DENOMINATOR {
            warn!("vertex {} projects through the eye", vertex);
            return Err(ConfigError::DegenerateProjection {
                vertex,
                denominator,
            });
        }
    }

    let sorted = sort_back_to_front(&geometry.faces, &transformed);
    let instructions = emit_polygons(&sorted, &transformed);
    debug!("emitted {} polygons", instructions.len());

    info!(
        "rendered {}x{}x{} cube into {}x{} frame",
        params.cube_width,
        params.cube_height,
        params.cube_depth,
        params.projection.view_width,
        params.projection.view_height
    );

    Ok(Frame {
        width: params.projection.view_width,
        height: params.projection.view_height,
        instructions,
    })
}
