/// PNG encoding and the one-shot render-to-bytes path
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use log::debug;

use crate::canvas::PixmapCanvas;
use crate::error::Result;
use crate::render::{render_cube, RenderParams};

/// Content type announced for [`EncodedImage`] bytes
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// Encoded image bytes ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Encode the canvas as an RGBA PNG
pub fn encode_png(canvas: &PixmapCanvas) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer).write_image(
        &canvas.to_rgba8(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8.into(),
    )?;
    Ok(buffer)
}

/// Render the cube, paint it onto a fresh canvas and encode it as PNG.
///
/// The canvas lives only for the duration of this call.
pub fn render_png(params: &RenderParams) -> Result<EncodedImage> {
    let frame = render_cube(params)?;

    let mut canvas = PixmapCanvas::with_size(frame.width, frame.height)?;
    frame.paint(&mut canvas)?;

    let bytes = encode_png(&canvas)?;
    debug!("encoded {} byte png", bytes.len());

    Ok(EncodedImage {
        bytes,
        content_type: PNG_CONTENT_TYPE,
        width: canvas.width(),
        height: canvas.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CanvasError, ConfigError, Error};
    use crate::projection::Projection;
    use image::ImageFormat;

    #[test]
    fn test_render_png_defaults() {
        let encoded = render_png(&RenderParams::default()).unwrap();
        assert_eq!(encoded.content_type, "image/png");
        assert_eq!((encoded.width, encoded.height), (400, 400));
        assert_eq!(image::guess_format(&encoded.bytes).unwrap(), ImageFormat::Png);

        let decoded = image::load_from_memory(&encoded.bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (400, 400));
        // Corners stay background, the center is covered by the cube.
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_ne!(decoded.get_pixel(200, 200).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_png_uses_palette() {
        let encoded = render_png(&RenderParams::default()).unwrap();
        let decoded = image::load_from_memory(&encoded.bytes).unwrap().to_rgba8();
        for pixel in decoded.pixels() {
            let [r, g, b, a] = pixel.0;
            assert_eq!(a, 255);
            assert!(r == g && g == b, "non-gray pixel {:?}", pixel);
            assert!(r >= 160, "pixel darker than palette {:?}", pixel);
        }
    }

    #[test]
    fn test_render_png_is_deterministic() {
        let params = RenderParams::default();
        assert_eq!(render_png(&params).unwrap(), render_png(&params).unwrap());
    }

    #[test]
    fn test_render_png_config_error() {
        let params = RenderParams::default().with_cube_size(-1.0, 2.0, 4.0);
        assert!(matches!(
            render_png(&params),
            Err(Error::Config(ConfigError::NonPositiveDimension { name: "width", .. }))
        ));
    }

    #[test]
    fn test_render_png_fractional_view() {
        let params =
            RenderParams::default().with_projection(Projection::new(400.5, 400.0, 256.0, 6.0));
        assert!(matches!(
            render_png(&params),
            Err(Error::Canvas(CanvasError::FractionalSize { .. }))
        ));
    }
}
