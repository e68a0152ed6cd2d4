//! Headless snapshots: paint the board once and save it as a PPM image.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::render::{BoardView, PixelCanvas};
use crate::types::PointerPosition;

/// Paint the board into a fresh canvas.
pub fn render_snapshot(pointer: Option<PointerPosition>) -> PixelCanvas {
    BoardView::default().render(pointer)
}

/// Paint the board and write it to `path` as binary PPM.
pub fn write_snapshot(path: &Path, pointer: Option<PointerPosition>) -> Result<()> {
    let canvas = render_snapshot(pointer);
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    canvas
        .write_ppm(BufWriter::new(file))
        .with_context(|| format!("write {}", path.display()))?;
    log::info!(
        "wrote {}x{} snapshot to {} (pointer {:?})",
        canvas.width(),
        canvas.height(),
        path.display(),
        pointer
    );
    Ok(())
}
