/// Geometry primitives for the cube
use nalgebra::Point3;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Perceived brightness in `0.0..=1.0` (Rec. 601 weights)
    pub fn luminance(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }
}

/// Vertex indices of each cube side, in winding order.
pub const FACE_INDICES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [5, 4, 7, 6],
    [4, 0, 3, 7],
    [0, 4, 5, 1],
    [3, 2, 6, 7],
];

/// Fill color of each cube side, parallel to [`FACE_INDICES`].
pub const PALETTE: [Rgb; 6] = [
    Rgb::gray(240),
    Rgb::gray(200),
    Rgb::gray(220),
    Rgb::gray(180),
    Rgb::gray(160),
    Rgb::gray(255),
];

/// A quadrilateral side of the cube together with its fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub indices: [usize; 4],
    pub color: Rgb,
}

impl Face {
    pub const fn new(indices: [usize; 4], color: Rgb) -> Self {
        Self { indices, color }
    }

    /// Resolve the face's corners against a vertex list, keeping winding order.
    ///
    /// # Panics
    ///
    /// Every index must be below 8.
    pub fn corners(&self, vertices: &[Point3<f64>; 8]) -> [Point3<f64>; 4] {
        self.indices.map(|i| vertices[i])
    }
}

/// The box being rendered: 8 corner vertices and 6 colored faces.
///
/// Vertices 0-3 lie on the `z = -depth/2` side, ordered top-left, top-right,
/// bottom-right, bottom-left. Vertices 4-7 repeat that pattern on the
/// `z = +depth/2` side, so vertex `i + 4` sits behind vertex `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeGeometry {
    pub vertices: [Point3<f64>; 8],
    pub faces: [Face; 6],
}

impl CubeGeometry {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);

        let vertices = [
            Point3::new(-hw, hh, -hd),
            Point3::new(hw, hh, -hd),
            Point3::new(hw, -hh, -hd),
            Point3::new(-hw, -hh, -hd),
            Point3::new(-hw, hh, hd),
            Point3::new(hw, hh, hd),
            Point3::new(hw, -hh, hd),
            Point3::new(-hw, -hh, hd),
        ];

        let faces = std::array::from_fn(|i| Face::new(FACE_INDICES[i], PALETTE[i]));

        Self { vertices, faces }
    }
}
