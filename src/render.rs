// Debug views of a frame. Both read the frame only through `dimensions()`
// and per-column access.
//
// Text: one line per column, '0' for a painted (WHITE) cell, '1' otherwise.
// PNG: one image line per column, painted cells bright, the rest dark.

use std::io::Write;
use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::types::WHITE;

/// Write the frame as text. A null frame writes nothing.
pub fn write_frame<W: Write>(frame: &Frame, out: &mut W) -> Result<()> {
    let (_, cols) = frame.dimensions().inspect_err(|err| {
        tracing::error!("print frame: {err}");
    })?;

    let mut line = Vec::new();
    writeln!(out, "frame")?;
    for y in 0..cols {
        line.clear();
        line.extend(frame.column(y)?.iter().map(|&c| if c == WHITE { b'0' } else { b'1' }));
        line.push(b'\n');
        out.write_all(&line)?;
    }
    out.flush()?;
    Ok(())
}

/// Text rendering as a `String` (handy for tests and logs).
pub fn frame_to_string(frame: &Frame) -> Result<String> {
    let mut out = Vec::new();
    write_frame(frame, &mut out)?;
    String::from_utf8(out).map_err(|e| Error::Io(std::io::Error::other(e)))
}

/// Grayscale picture of the frame: `rows` wide, `cols` tall.
pub fn to_luma_image(frame: &Frame) -> Result<GrayImage> {
    let (rows, cols) = frame.dimensions()?;
    let width = u32::try_from(rows).map_err(|_| too_big(rows, cols))?;
    let height = u32::try_from(cols).map_err(|_| too_big(rows, cols))?;

    let data = frame.data()?;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let cell = data[x as usize + y as usize * rows];
        Luma([if cell == WHITE { 255 } else { 0 }])
    }))
}

/// Save the grayscale picture as PNG.
pub fn save_png(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    to_luma_image(frame)?.save(path)?;
    tracing::info!("frame snapshot written to {}", path.display());
    Ok(())
}

fn too_big(rows: usize, cols: usize) -> Error {
    Error::FrameTooLarge { rows, cols }
}
