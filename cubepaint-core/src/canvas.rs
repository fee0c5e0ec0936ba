/// Drawing surfaces that consume draw instructions
use nalgebra::Point2;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::error::CanvasError;
use crate::geometry::Rgb;

/// A surface that can fill solid quadrilaterals.
///
/// Calls arrive farthest first; later fills must paint over earlier ones.
pub trait Canvas {
    type Error;

    fn fill_polygon(&mut self, points: &[Point2<f64>; 4], color: Rgb) -> Result<(), Self::Error>;
}

/// Anti-aliased raster canvas on a white background
pub struct PixmapCanvas {
    pixmap: Pixmap,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::Allocation { width, height })?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    /// Allocate a canvas for a frame whose size is a whole number of pixels
    pub fn with_size(width: f64, height: f64) -> Result<Self, CanvasError> {
        let whole = |v: f64| v.fract() == 0.0 && v >= 0.0 && v <= u32::MAX as f64;
        if !whole(width) || !whole(height) {
            return Err(CanvasError::FractionalSize { width, height });
        }
        Self::new(width as u32, height as u32)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at a pixel, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        // The pixmap only bounds-checks the flat index, so x past the row end
        // would land on the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb::new(color.red(), color.green(), color.blue()))
    }

    /// Straight (non-premultiplied) RGBA8 rows, top to bottom
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }
}

impl Canvas for PixmapCanvas {
    type Error = CanvasError;

    fn fill_polygon(&mut self, points: &[Point2<f64>; 4], color: Rgb) -> Result<(), CanvasError> {
        let mut builder = PathBuilder::new();
        builder.move_to(points[0].x as f32, points[0].y as f32);
        for point in &points[1..] {
            builder.line_to(point.x as f32, point.y as f32);
        }
        builder.close();

        let path = builder.finish().ok_or(CanvasError::InvalidPolygon {
            points: points.map(|p| (p.x, p.y)),
        })?;

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = true;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }
}
