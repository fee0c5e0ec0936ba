/// Frame orientation and the per-vertex transform pipeline
use log::debug;
use nalgebra::Point3;

use crate::point::PointOps;
use crate::projection::Projection;

/// Orientation of the cube around three axes (in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Orientation {
    pub const DEFAULT_X: f64 = -35.0;
    pub const DEFAULT_Y: f64 = -30.0;
    pub const DEFAULT_Z: f64 = 15.0;

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate a point about X, then Y, then Z
    pub fn apply(&self, point: &Point3<f64>) -> Point3<f64> {
        point.rotate_x(self.x).rotate_y(self.y).rotate_z(self.z)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_X, Self::DEFAULT_Y, Self::DEFAULT_Z)
    }
}

/// Vertices after rotation and projection, indexed like the source vertices.
///
/// Each entry holds `(screen_x, screen_y, view_z)`. Faces resolve their
/// corners against it, so face indices must be below 8.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedVertices(pub [Point3<f64>; 8]);

impl TransformedVertices {
    pub fn iter(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.0.iter()
    }
}

/// Rotate every vertex into view space, returning the rotated (unprojected) set
pub fn rotate_vertices(vertices: &[Point3<f64>; 8], orientation: &Orientation) -> [Point3<f64>; 8] {
    vertices.map(|vertex| orientation.apply(&vertex))
}

/// Rotate then project every vertex
pub fn transform_vertices(
    vertices: &[Point3<f64>; 8],
    orientation: &Orientation,
    projection: &Projection,
) -> TransformedVertices {
    let transformed = rotate_vertices(vertices, orientation).map(|vertex| vertex.project(projection));
    debug!(
        "transformed {} vertices with orientation ({}, {}, {})",
        transformed.len(),
        orientation.x,
        orientation.y,
        orientation.z
    );
    TransformedVertices(transformed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CubeGeometry;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, Vector3};

    /// The same rotation as `Orientation::apply`, as a single matrix
    fn composed_rotation(orientation: &Orientation) -> Rotation3<f64> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), orientation.x.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), orientation.y.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), orientation.z.to_radians());

        // Apply rotations in order: X, Y, Z
        rz * ry * rx
    }

    #[test]
    fn test_default_orientation() {
        let orientation = Orientation::default();
        assert_eq!(orientation, Orientation::new(-35.0, -30.0, 15.0));
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = composed_rotation(&Orientation::zero());
        assert!((rotation.matrix() - nalgebra::Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_matrix_matches_chained_rotations() {
        let orientation = Orientation::default();
        let rotation = composed_rotation(&orientation);
        let cube = CubeGeometry::new(5.0, 2.0, 4.0);
        for vertex in &cube.vertices {
            assert_relative_eq!(orientation.apply(vertex), rotation * vertex, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_orientation_projects_by_formula() {
        let cube = CubeGeometry::new(5.0, 2.0, 4.0);
        let projection = Projection::default();
        let transformed = transform_vertices(&cube.vertices, &Orientation::zero(), &projection);

        for (source, screen) in cube.vertices.iter().zip(transformed.iter()) {
            let factor = 256.0 / (6.0 + source.z);
            assert_eq!(screen.x, source.x * factor + 200.0);
            assert_eq!(screen.y, -source.y * factor + 200.0);
            assert_eq!(screen.z, source.z);
        }
    }

    #[test]
    fn test_projection_keeps_rotated_depth() {
        let cube = CubeGeometry::new(5.0, 2.0, 4.0);
        let orientation = Orientation::default();
        let rotated = rotate_vertices(&cube.vertices, &orientation);
        let transformed = transform_vertices(&cube.vertices, &orientation, &Projection::default());

        for (r, t) in rotated.iter().zip(transformed.iter()) {
            assert_eq!(r.z, t.z);
        }
    }
}
