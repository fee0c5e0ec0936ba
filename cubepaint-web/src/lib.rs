/// CubePaint Web - WASM bindings that deliver the rendered PNG to JavaScript
///
/// `WebRenderer` holds the render parameters; `render_png` returns the encoded
/// bytes and `render_blob` wraps them in a `Blob` typed `image/png`, ready for
/// `URL.createObjectURL` or a `fetch` response body.

use cubepaint_core::{render_png, EncodedImage, Orientation, Projection, RenderParams, PNG_CONTENT_TYPE};
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag};

fn to_js_error(err: cubepaint_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WebRenderer {
    params: RenderParams,
}

#[wasm_bindgen]
impl WebRenderer {
    /// A renderer with the default cube, orientation and 400x400 view
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebRenderer {
        WebRenderer {
            params: RenderParams::default(),
        }
    }

    pub fn set_cube_size(&mut self, width: f64, height: f64, depth: f64) {
        self.params = self.params.with_cube_size(width, height, depth);
    }

    /// Orientation angles in degrees, applied X then Y then Z
    pub fn set_orientation(&mut self, x: f64, y: f64, z: f64) {
        self.params = self.params.with_orientation(Orientation::new(x, y, z));
    }

    pub fn set_projection(
        &mut self,
        view_width: f64,
        view_height: f64,
        field_of_view: f64,
        viewer_distance: f64,
    ) {
        self.params = self.params.with_projection(Projection::new(
            view_width,
            view_height,
            field_of_view,
            viewer_distance,
        ));
    }

    pub fn content_type(&self) -> String {
        PNG_CONTENT_TYPE.to_string()
    }

    pub fn render_png(&self) -> Result<Vec<u8>, JsValue> {
        self.encode().map(|image| image.bytes).map_err(to_js_error)
    }

    pub fn render_blob(&self) -> Result<Blob, JsValue> {
        let image = self.encode().map_err(to_js_error)?;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(image.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(image.content_type);
        Blob::new_with_u8_array_sequence_and_options(&parts, &options)
    }
}

impl WebRenderer {
    fn encode(&self) -> cubepaint_core::Result<EncodedImage> {
        let image = render_png(&self.params)?;
        debug!("web render produced {} bytes", image.bytes.len());
        Ok(image)
    }
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubepaint_core::{ConfigError, Error};

    #[test]
    fn test_default_encode() {
        let renderer = WebRenderer::new();
        let image = renderer.encode().unwrap();
        assert_eq!(image.content_type, "image/png");
        assert_eq!((image.width, image.height), (400, 400));
        assert_eq!(renderer.content_type(), "image/png");
    }

    #[test]
    fn test_setters_reach_render() {
        let mut renderer = WebRenderer::new();
        renderer.set_cube_size(1.0, 1.0, 1.0);
        renderer.set_orientation(0.0, 45.0, 0.0);
        renderer.set_projection(64.0, 32.0, 40.0, 4.0);

        let image = renderer.encode().unwrap();
        assert_eq!((image.width, image.height), (64, 32));
    }

    #[test]
    fn test_invalid_size_reported() {
        let mut renderer = WebRenderer::new();
        renderer.set_cube_size(1.0, -2.0, 1.0);
        assert!(matches!(
            renderer.encode(),
            Err(Error::Config(ConfigError::NonPositiveDimension { name: "height", .. }))
        ));
    }
}
