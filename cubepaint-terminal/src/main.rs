/// CubePaint Terminal - render the cube once
///
/// Prints a colored ASCII preview of the default cube. When a path is given,
/// the full-resolution PNG is written there as well.
///
/// Usage: cubepaint-terminal [output.png]

use cubepaint_core::{render_cube, RenderParams};
use cubepaint_terminal::{draw_preview, preview_size, save_png};
use env_logger::Env;
use log::info;
use std::env;
use std::io::stdout;
use std::path::PathBuf;

const DEFAULT_LOGGING_LEVEL: &str = "info";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();

    let params = RenderParams::default();

    if let Some(path) = env::args_os().nth(1).map(PathBuf::from) {
        let image = save_png(&params, &path)?;
        info!(
            "saved {}x{} {} ({} bytes) to {}",
            image.width,
            image.height,
            image.content_type,
            image.bytes.len(),
            path.display()
        );
    }

    let frame = render_cube(&params)?;
    let (columns, rows) = preview_size();
    draw_preview(&frame, &mut stdout(), columns, rows)?;

    Ok(())
}
