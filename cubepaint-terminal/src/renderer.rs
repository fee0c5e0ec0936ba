/// ASCII rasterizer for terminal previews
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use cubepaint_core::{Canvas, Point2, Rgb};
use std::convert::Infallible;
use std::io::Write;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Character-grid canvas. Later fills overwrite earlier ones; there is no
/// depth buffer.
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    cells: Vec<Option<Rgb>>,
}

impl AsciiCanvas {
    /// A `width` x `height` grid covering a `frame_width` x `frame_height` image
    pub fn new(width: usize, height: usize, frame_width: f64, frame_height: f64) -> Self {
        Self {
            width,
            height,
            scale_x: width as f64 / frame_width,
            scale_y: height as f64 / frame_height,
            cells: vec![None; width * height],
        }
    }

    /// The largest grid that fits in `columns` x `rows` cells while keeping
    /// the frame's aspect ratio
    pub fn fit(frame_width: f64, frame_height: f64, columns: usize, rows: usize) -> Self {
        let pixels_per_column = (frame_width / columns.max(1) as f64)
            .max(frame_height / (rows.max(1) as f64 * CELL_ASPECT));
        let width = (frame_width / pixels_per_column).floor() as usize;
        let height = (frame_height / (pixels_per_column * CELL_ASPECT)).floor() as usize;
        Self::new(width.max(1), height.max(1), frame_width, frame_height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[y * self.width + x]
    }

    fn rasterize_triangle(&mut self, coords: [(f64, f64); 3], color: Rgb) {
        let [v0, v1, v2] = coords;

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i64;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i64;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i64;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i64;

        // Clip to grid bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i64 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (x as f64 + 0.5, y as f64 + 0.5);
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, p) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.cells[y as usize * self.width + x as usize] = Some(color);
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        if self.width == 0 {
            return Ok(());
        }

        for row in self.cells.chunks(self.width) {
            for cell in row {
                match cell {
                    Some(color) => {
                        writer.queue(SetForegroundColor(Color::Rgb {
                            r: color.r,
                            g: color.g,
                            b: color.b,
                        }))?;
                        writer.queue(Print(shade(*color)))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Canvas for AsciiCanvas {
    type Error = Infallible;

    fn fill_polygon(&mut self, points: &[Point2<f64>; 4], color: Rgb) -> Result<(), Infallible> {
        let [a, b, c, d] = points.map(|p| (p.x * self.scale_x, p.y * self.scale_y));

        // Projected cube faces are convex, so a fan of two triangles covers them.
        self.rasterize_triangle([a, b, c], color);
        self.rasterize_triangle([a, c, d], color);
        Ok(())
    }
}

/// Ramp character for a filled cell; never blank
fn shade(color: Rgb) -> char {
    let index = (color.luminance() * (LUMINOSITY_RAMP.len() - 1) as f32).round() as usize;
    LUMINOSITY_RAMP[index.clamp(1, LUMINOSITY_RAMP.len() - 1)]
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f64, f64),
    v1: (f64, f64),
    v2: (f64, f64),
    p: (f64, f64),
) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-9 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(left: f64, top: f64, size: f64) -> [Point2<f64>; 4] {
        [
            Point2::new(left, top),
            Point2::new(left + size, top),
            Point2::new(left + size, top + size),
            Point2::new(left, top + size),
        ]
    }

    #[test]
    fn test_fit_keeps_aspect() {
        let canvas = AsciiCanvas::fit(400.0, 400.0, 120, 40);
        assert_eq!(canvas.height(), 40);
        assert_eq!(canvas.width(), 80);

        let canvas = AsciiCanvas::fit(400.0, 400.0, 40, 100);
        assert_eq!(canvas.width(), 40);
        assert_eq!(canvas.height(), 20);
    }

    #[test]
    fn test_later_fill_wins() {
        let mut canvas = AsciiCanvas::new(10, 10, 100.0, 100.0);
        canvas.fill_polygon(&square(0.0, 0.0, 100.0), Rgb::gray(160)).unwrap();
        canvas.fill_polygon(&square(40.0, 40.0, 20.0), Rgb::gray(255)).unwrap();

        assert_eq!(canvas.cell(9, 0), Some(Rgb::gray(160)));
        assert_eq!(canvas.cell(5, 4), Some(Rgb::gray(255)));
        assert_eq!(canvas.cell(10, 0), None);
    }

    #[test]
    fn test_winding_independent() {
        let mut canvas = AsciiCanvas::new(10, 10, 10.0, 10.0);
        let mut points = square(2.0, 2.0, 6.0);
        points.reverse();
        canvas.fill_polygon(&points, Rgb::gray(200)).unwrap();
        assert_eq!(canvas.cell(4, 4), Some(Rgb::gray(200)));
        assert_eq!(canvas.cell(0, 0), None);
    }

    #[test]
    fn test_shade_never_blank() {
        assert_ne!(shade(Rgb::gray(0)), ' ');
        assert_eq!(shade(Rgb::gray(255)), '@');
    }

    #[test]
    fn test_zero_width_grid_draws_nothing() {
        let mut canvas = AsciiCanvas::new(0, 5, 400.0, 400.0);
        canvas.fill_polygon(&square(0.0, 0.0, 400.0), Rgb::gray(200)).unwrap();

        let mut out = Vec::new();
        canvas.draw(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(canvas.cell(0, 0), None);
    }

    #[test]
    fn test_draw_rows() {
        let mut canvas = AsciiCanvas::new(3, 2, 3.0, 2.0);
        canvas.fill_polygon(&square(0.0, 0.0, 1.0), Rgb::gray(255)).unwrap();

        let mut out = Vec::new();
        canvas.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.contains('@'));
    }
}
