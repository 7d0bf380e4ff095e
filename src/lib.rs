//! Lock-free parallel writes into one shared frame buffer.
//!
//! A [`Frame`] is a single allocation: a header holding `rows` and `cols`,
//! followed by `rows * cols` one-byte cells in column-major order. Drawing a
//! rectangle splits its column span into disjoint [`Segment`]s, one per
//! worker; each worker gets its own `&mut` column block, so the fill needs no
//! lock and no atomic. Joining the workers is the only synchronization.
//!
//! ```
//! use nosync_frame::{Frame, Rect, WHITE};
//!
//! let mut frame = Frame::new(10, 15);
//! frame.draw(Rect::new(5, 1, 8, 13), 2).unwrap();
//! assert_eq!(frame.cell(5, 1).unwrap(), WHITE);
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod fill;
pub mod frame;
pub mod logging;
#[cfg(feature = "preview")]
pub mod preview;
pub mod render;
pub mod report;
pub mod segment;
pub mod types;

pub use config::{DrawOptions, WorkerLimit, hardware_concurrency};
pub use draw::{DrawReport, effective_workers};
pub use error::{Error, Result};
pub use frame::{DATA_INDEX, Frame};
pub use segment::plan_segments;
pub use types::{BLACK, Rect, Segment, WHITE};
