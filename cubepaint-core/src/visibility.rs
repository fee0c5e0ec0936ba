/// Painter's algorithm ordering of cube faces
use log::debug;

use crate::geometry::Face;
use crate::transform::TransformedVertices;

/// A face paired with the mean view-space depth of its corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthSortedFace {
    pub face: Face,
    pub depth: f64,
}

/// Mean of the carried-through z of the face's four transformed corners
pub fn average_depth(face: &Face, vertices: &TransformedVertices) -> f64 {
    let corners = face.corners(&vertices.0);
    corners.iter().map(|corner| corner.z).sum::<f64>() / corners.len() as f64
}

/// Order faces farthest first so nearer faces overpaint them.
///
/// The sort is stable: faces with equal depth keep their input order.
/// Face indices must be below 8. Only valid for a convex solid whose faces
/// never interpenetrate.
pub fn sort_back_to_front(faces: &[Face], vertices: &TransformedVertices) -> Vec<DepthSortedFace> {
    let mut sorted: Vec<DepthSortedFace> = faces
        .iter()
        .map(|face| DepthSortedFace {
            face: *face,
            depth: average_depth(face, vertices),
        })
        .collect();

    sorted.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    debug!(
        "face depths back to front: {:?}",
        sorted.iter().map(|f| f.depth).collect::<Vec<_>>()
    );
    sorted
}
