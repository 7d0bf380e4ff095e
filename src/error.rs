// One error type for the whole crate.
// Every variant states *where* things went wrong.
use crate::types::Rect;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("frame create: rows and/or cols are 0 (rows: {rows}, cols: {cols})")]
    ZeroDimension { rows: usize, cols: usize }, // Frame::new with an empty side

    #[error("frame create: {rows} x {cols} cells does not fit in the address space")]
    FrameTooLarge { rows: usize, cols: usize }, // rows * cols + header overflows usize

    #[error("frame create: allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize }, // the host refused the buffer

    #[error("frame buffer is null")]
    NullFrame, // any operation on a frame whose creation failed

    #[error("draw: rect {rect} does not fit a {rows} x {cols} frame")]
    RectOutOfBounds { rect: Rect, rows: usize, cols: usize },

    #[error("cell ({x}, {y}) is outside a {rows} x {cols} frame")]
    CellOutOfBounds { x: usize, y: usize, rows: usize, cols: usize },

    #[error("segments: cannot split {width} columns across {workers} workers")]
    InvalidWorkerCount { width: usize, workers: usize },

    #[error("frame bytes: header says {rows} x {cols} but the buffer holds {len} bytes")]
    HeaderMismatch { rows: usize, cols: usize, len: usize },

    #[error("draw: could not start fill worker {worker}: {source}")]
    WorkerSpawn { worker: usize, source: std::io::Error },

    #[error("draw: fill worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("config: {0}")]
    InvalidConfig(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("png: {0}")]
    Image(#[from] image::ImageError),

    #[error("window init: {0}")]
    WindowInit(String), // Creating the preview window failed

    #[error("window update: {0}")]
    WindowUpdate(String), // Pushing the frame to the preview window failed
}

pub type Result<T> = std::result::Result<T, Error>;
