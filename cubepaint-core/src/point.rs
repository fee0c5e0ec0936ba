/// Pure rotation and projection operations on 3D points
use nalgebra::{Point3, Rotation3, Vector3};

use crate::projection::Projection;

/// Value-returning transforms for a point in 3D space.
///
/// Angles are in degrees. Every operation returns a new point; the receiver is
/// never modified, so transforms compose as ordinary method chains.
pub trait PointOps: Sized {
    /// Rotate about the X axis, turning +y toward +z
    fn rotate_x(&self, degrees: f64) -> Self;

    /// Rotate about the Y axis, turning +z toward +x
    fn rotate_y(&self, degrees: f64) -> Self;

    /// Rotate about the Z axis, turning +x toward +y
    fn rotate_z(&self, degrees: f64) -> Self;

    /// Perspective-divide onto the viewing plane.
    ///
    /// x and y land in raster space (y grows downward). z is carried through
    /// untouched and is only meaningful as a depth-ordering key.
    fn project(&self, projection: &Projection) -> Self;
}

impl PointOps for Point3<f64> {
    fn rotate_x(&self, degrees: f64) -> Self {
        Rotation3::from_axis_angle(&Vector3::x_axis(), degrees.to_radians()) * self
    }

    fn rotate_y(&self, degrees: f64) -> Self {
        Rotation3::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()) * self
    }

    fn rotate_z(&self, degrees: f64) -> Self {
        Rotation3::from_axis_angle(&Vector3::z_axis(), degrees.to_radians()) * self
    }

    fn project(&self, projection: &Projection) -> Self {
        let factor = projection.field_of_view / projection.depth_denominator(self.z);
        let (cx, cy) = projection.center();
        Point3::new(self.x * factor + cx, -self.y * factor + cy, self.z)
    }
}
