/// Terminal preview of a rendered cube frame
use anyhow::Context;
use crossterm::terminal;
use cubepaint_core::{render_png, EncodedImage, Frame, RenderParams};
use log::{debug, warn};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod renderer;

pub use renderer::AsciiCanvas;

/// Grid used when the output is not attached to a terminal
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Current terminal size, minus one row for the trailing prompt
pub fn preview_size() -> (usize, usize) {
    let (columns, rows) = terminal::size().unwrap_or_else(|err| {
        warn!("cannot query terminal size ({}), using {:?}", err, FALLBACK_SIZE);
        FALLBACK_SIZE
    });
    (columns as usize, rows.saturating_sub(1).max(1) as usize)
}

/// Paint `frame` onto a character grid that fits `columns` x `rows`
pub fn rasterize(frame: &Frame, columns: usize, rows: usize) -> AsciiCanvas {
    let mut canvas = AsciiCanvas::fit(frame.width, frame.height, columns, rows);
    if let Err(never) = frame.paint(&mut canvas) {
        match never {}
    }
    debug!("preview grid {}x{}", canvas.width(), canvas.height());
    canvas
}

/// Draw `frame` as colored ASCII and flush the writer once
pub fn draw_preview<W: Write>(frame: &Frame, writer: &mut W, columns: usize, rows: usize) -> io::Result<()> {
    rasterize(frame, columns, rows).draw(writer)?;
    writer.flush()
}

/// Render the PNG and write it to `path`, which need not be valid UTF-8
pub fn save_png(params: &RenderParams, path: &Path) -> anyhow::Result<EncodedImage> {
    let image = render_png(params)?;
    fs::write(path, &image.bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(image)
}
