/// Draw instructions handed to a canvas
use nalgebra::Point2;

use crate::geometry::Rgb;
use crate::transform::TransformedVertices;
use crate::visibility::DepthSortedFace;

/// One filled quadrilateral in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstruction {
    pub polygon: [Point2<f64>; 4],
    pub color: Rgb,
}

/// Turn depth-ordered faces into draw instructions, preserving their order
/// and each face's winding.
pub fn emit_polygons(sorted: &[DepthSortedFace], vertices: &TransformedVertices) -> Vec<DrawInstruction> {
    sorted
        .iter()
        .map(|entry| DrawInstruction {
            polygon: entry.face.corners(&vertices.0).map(|corner| corner.xy()),
            color: entry.face.color,
        })
        .collect()
}
