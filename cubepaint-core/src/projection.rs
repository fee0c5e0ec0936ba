/// Viewing plane and perspective parameters

/// Perspective projection onto a `view_width` x `view_height` raster.
///
/// `field_of_view` scales the perspective divide (in pixels per unit at unit
/// depth) and `viewer_distance` is the distance from the eye to the origin
/// along the view axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub view_width: f64,
    pub view_height: f64,
    pub field_of_view: f64,
    pub viewer_distance: f64,
}

impl Projection {
    pub const DEFAULT_VIEW_SIZE: f64 = 400.0;
    pub const DEFAULT_FIELD_OF_VIEW: f64 = 256.0;
    pub const DEFAULT_VIEWER_DISTANCE: f64 = 6.0;

    pub fn new(view_width: f64, view_height: f64, field_of_view: f64, viewer_distance: f64) -> Self {
        Self {
            view_width,
            view_height,
            field_of_view,
            viewer_distance,
        }
    }

    /// Denominator of the perspective divide for a point at depth `z`
    pub fn depth_denominator(&self, z: f64) -> f64 {
        self.viewer_distance + z
    }

    /// Raster center in screen space
    pub fn center(&self) -> (f64, f64) {
        (self.view_width / 2.0, self.view_height / 2.0)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_VIEW_SIZE,
            Self::DEFAULT_VIEW_SIZE,
            Self::DEFAULT_FIELD_OF_VIEW,
            Self::DEFAULT_VIEWER_DISTANCE,
        )
    }
}
