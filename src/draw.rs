// Draw coordinator: validate the rect, pick a worker count, hand every worker
// its own column block and join them all before returning.
//
// The column span y1..=y2 is one contiguous byte range (column-major), so it is
// carved into per-segment blocks with `split_at_mut`. Blocks never overlap,
// which is the whole reason no lock or atomic is needed.

use std::mem;
use std::thread;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::config::DrawOptions;
use crate::error::{Error, Result};
use crate::fill::fill_segment;
use crate::frame::Frame;
use crate::report::{Stopwatch, format_char_count};
use crate::segment::plan_segments;
use crate::types::{Rect, Segment};

/// What a successful draw did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawReport {
    pub rect: Rect,
    /// Effective worker count, calling thread included.
    pub workers: usize,
    /// Column ranges (relative to `rect.y1`), one per worker; the last one
    /// ran on the calling thread.
    pub segments: Vec<Segment>,
    pub cells: usize,
    pub elapsed: Duration,
}

impl DrawReport {
    /// Threads spawned besides the caller.
    pub fn spawned(&self) -> usize {
        self.workers - 1
    }
}

/// `requested` clamped to `[1, min(cols_to_draw, hardware)]`.
pub fn effective_workers(requested: usize, cols_to_draw: usize, hardware: usize) -> usize {
    let ceiling = cols_to_draw.min(hardware).max(1);
    requested.clamp(1, ceiling)
}

pub(crate) fn draw(frame: &mut Frame, rect: Rect, options: &DrawOptions) -> Result<DrawReport> {
    let (rows, cols) = frame.dimensions().inspect_err(|err| error!("draw: {err}"))?;

    if !rect.fits(rows, cols) {
        let err = Error::RectOutOfBounds { rect, rows, cols };
        error!("draw sanity check failed: {err}");
        return Err(err);
    }

    let span = rect.cols_to_draw();
    let workers = effective_workers(options.workers, span, options.max_workers.resolve());
    let segments = if workers > 1 {
        plan_segments(span, workers)?
    } else {
        vec![Segment::new(0, span - 1)]
    };

    let note = if workers > 1 {
        format!("threads: {} worker threads + main-thread", workers - 1)
    } else {
        "main-thread".to_string()
    };
    info!(
        "draw ({note}) {rect} total: {} chars",
        format_char_count(rect.cell_count() as u64)
    );
    if workers > 1 {
        for (i, segment) in segments.iter().enumerate() {
            info!("* thread {}: {segment}", i + 1);
        }
    }

    let stopwatch = Stopwatch::start();
    let data = frame.data_mut()?;
    dispatch(&mut data[rect.y1 * rows..(rect.y2 + 1) * rows], rows, rect, &segments)?;
    let elapsed = stopwatch.elapsed();

    info!("(execution time: {} milliseconds)", elapsed.as_millis());

    Ok(DrawReport {
        rect,
        workers,
        segments,
        cells: rect.cell_count(),
        elapsed,
    })
}

/// Run one fill per segment: all but the last on scoped threads, the last on
/// the calling thread. `span` holds the columns `rect.y1..=rect.y2`.
fn dispatch(span: &mut [u8], rows: usize, rect: Rect, segments: &[Segment]) -> Result<()> {
    dispatch_with(span, rows, rect, segments, fill_segment)
}

type FillFn = fn(&mut [u8], usize, Rect, Segment);

fn dispatch_with(
    span: &mut [u8],
    rows: usize,
    rect: Rect,
    segments: &[Segment],
    fill: FillFn,
) -> Result<()> {
    let Some((&own, spawned)) = segments.split_last() else {
        return Ok(());
    };

    let mut rest = span;
    let mut blocks = Vec::with_capacity(spawned.len());
    for &segment in spawned {
        let (block, tail) = mem::take(&mut rest).split_at_mut(segment.width() * rows);
        blocks.push((segment, block));
        rest = tail;
    }
    let own_block = rest;

    thread::scope(|scope| {
        let mut outcome: Result<()> = Ok(());
        let mut handles = Vec::with_capacity(blocks.len());

        for (i, (segment, block)) in blocks.into_iter().enumerate() {
            let worker = i + 1;
            let spawn = thread::Builder::new()
                .name(format!("fill-{worker}"))
                .spawn_scoped(scope, move || fill(block, rows, rect, segment));
            match spawn {
                Ok(handle) => handles.push((worker, handle)),
                Err(source) => {
                    warn!("draw: fill worker {worker} did not start: {source}");
                    outcome = Err(Error::WorkerSpawn { worker, source });
                    break;
                }
            }
        }

        if outcome.is_ok() {
            fill(own_block, rows, rect, own);
        }

        // Joining is the barrier: every worker write happens-before the return.
        for (worker, handle) in handles {
            if handle.join().is_err() && outcome.is_ok() {
                error!("draw: fill worker {worker} panicked");
                outcome = Err(Error::WorkerPanicked { worker });
            }
        }

        outcome
    })
}
