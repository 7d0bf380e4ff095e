// Frame: one heap allocation that carries its own dimensions.
//
//   buffer (Box<[u8]>)
//   +-------------------------------+-------------------------------+
//   | rows (usize, native bytes)    | cols (usize, native bytes)    |   <- header, DATA_INDEX bytes
//   +-------+-------+-------+-------+-------+-------+-------+-------+
//   | cell  | cell  | cell  | ...                                   |   <- rows * cols cells
//   +-------+-------+-------+-------+-------+-------+-------+-------+
//
// Cells are column-major: cell (x, y) lives at DATA_INDEX + x + y * rows,
// so every column is one contiguous run of `rows` bytes.

use std::mem::size_of;

use tracing::{error, info};

use crate::config::DrawOptions;
use crate::draw::{self, DrawReport};
use crate::error::{Error, Result};
use crate::render;
use crate::types::{BLACK, Rect};

const WORD: usize = size_of::<usize>();

/// Offset of the first cell: the header holds two native `usize` values.
pub const DATA_INDEX: usize = 2 * WORD;

/// A `rows x cols` grid of byte cells plus its header, in one owned allocation.
///
/// A frame whose creation failed is "null": it holds no buffer and every
/// operation on it fails with [`Error::NullFrame`].
///
/// Frames move but do not clone. Use [`Frame::as_bytes`] and
/// [`Frame::from_bytes`] to copy the whole allocation.
#[derive(Debug)]
pub struct Frame {
    buffer: Option<Box<[u8]>>,
}

impl Frame {
    /// Create a blank (all [`BLACK`]) frame. On failure the frame is null;
    /// the reason is logged.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Ok(frame) => frame,
            Err(err) => {
                error!("create frame failed: {err}");
                Self::null()
            }
        }
    }

    /// Create a blank frame, reporting why creation failed.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::ZeroDimension { rows, cols });
        }

        let bytes = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_add(DATA_INDEX))
            .ok_or(Error::FrameTooLarge { rows, cols })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| Error::AllocationFailed { bytes })?;

        buffer.extend_from_slice(&rows.to_ne_bytes());
        buffer.extend_from_slice(&cols.to_ne_bytes());
        buffer.resize(bytes, BLACK);

        info!(rows, cols, "create frame");
        Ok(Self { buffer: Some(buffer.into_boxed_slice()) })
    }

    /// A frame without a buffer.
    pub fn null() -> Self {
        Self { buffer: None }
    }

    /// Rebuild a frame from a full allocation (header + cells), e.g. one
    /// produced by [`Frame::as_bytes`]. The header is host-native.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let len = bytes.len();
        if len < DATA_INDEX {
            return Err(Error::HeaderMismatch { rows: 0, cols: 0, len });
        }

        let (rows, cols) = decode_header(&bytes);
        let expected = rows
            .checked_mul(cols)
            .and_then(|cells| cells.checked_add(DATA_INDEX));
        if rows == 0 || cols == 0 || expected != Some(len) {
            return Err(Error::HeaderMismatch { rows, cols, len });
        }

        Ok(Self { buffer: Some(bytes.into_boxed_slice()) })
    }

    pub fn is_null(&self) -> bool {
        self.buffer.is_none()
    }

    /// Row count from the header; 0 (and a logged error) on a null frame.
    pub fn rows(&self) -> usize {
        match self.dimensions() {
            Ok((rows, _)) => rows,
            Err(err) => {
                error!("rows(): {err}");
                0
            }
        }
    }

    /// Column count from the header; 0 (and a logged error) on a null frame.
    pub fn cols(&self) -> usize {
        match self.dimensions() {
            Ok((_, cols)) => cols,
            Err(err) => {
                error!("cols(): {err}");
                0
            }
        }
    }

    /// `(rows, cols)` decoded from the header.
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let buffer = self.buffer.as_deref().ok_or(Error::NullFrame)?;
        Ok(decode_header(buffer))
    }

    /// Value of cell `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<u8> {
        let (rows, cols) = self.dimensions()?;
        if x >= rows || y >= cols {
            return Err(Error::CellOutOfBounds { x, y, rows, cols });
        }
        Ok(self.data()?[x + y * rows])
    }

    /// The `rows` cells of column `y`.
    pub fn column(&self, y: usize) -> Result<&[u8]> {
        let (rows, cols) = self.dimensions()?;
        if y >= cols {
            return Err(Error::CellOutOfBounds { x: 0, y, rows, cols });
        }
        Ok(&self.data()?[y * rows..(y + 1) * rows])
    }

    /// The cell region (everything after the header).
    pub fn data(&self) -> Result<&[u8]> {
        let buffer = self.buffer.as_deref().ok_or(Error::NullFrame)?;
        Ok(&buffer[DATA_INDEX..])
    }

    pub(crate) fn data_mut(&mut self) -> Result<&mut [u8]> {
        let buffer = self.buffer.as_deref_mut().ok_or(Error::NullFrame)?;
        Ok(&mut buffer[DATA_INDEX..])
    }

    /// The whole allocation: header followed by cells.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.buffer.as_deref().ok_or(Error::NullFrame)
    }

    /// Number of cells holding `value`.
    pub fn count_cells(&self, value: u8) -> Result<usize> {
        Ok(self.data()?.iter().filter(|&&c| c == value).count())
    }

    /// Paint `rect` white using up to `workers` threads (the calling thread
    /// included). Validation happens before any byte is written.
    pub fn draw(&mut self, rect: Rect, workers: usize) -> Result<DrawReport> {
        self.draw_with(rect, &DrawOptions::with_workers(workers))
    }

    pub fn draw_with(&mut self, rect: Rect, options: &DrawOptions) -> Result<DrawReport> {
        draw::draw(self, rect, options)
    }

    /// Print the frame to stdout as '0'/'1' per cell, one line per column.
    /// Useful on small frames only.
    pub fn print_frame(&self) -> Result<()> {
        let stdout = std::io::stdout();
        render::write_frame(self, &mut stdout.lock())
    }
}

fn decode_header(buffer: &[u8]) -> (usize, usize) {
    let mut rows = [0u8; WORD];
    let mut cols = [0u8; WORD];
    rows.copy_from_slice(&buffer[..WORD]);
    cols.copy_from_slice(&buffer[WORD..DATA_INDEX]);
    (usize::from_ne_bytes(rows), usize::from_ne_bytes(cols))
}
