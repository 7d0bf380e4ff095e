// Fill worker: paints the columns of one segment. Runs on many threads at
// once with no synchronization; correctness rests on segments never overlapping.

use std::ops::Range;

use crate::frame::DATA_INDEX;
use crate::types::{Rect, Segment, WHITE};

/// Byte ranges, as offsets into the whole frame allocation, that a worker
/// writes for `segment`: one run of `rect.rows_to_draw()` bytes per column.
pub fn column_runs(rows: usize, rect: Rect, segment: Segment) -> impl Iterator<Item = Range<usize>> {
    let len = rect.rows_to_draw();
    (segment.first..=segment.last).map(move |j| {
        let y = rect.y1 + j;
        let start = DATA_INDEX + rect.x1 + y * rows;
        start..start + len
    })
}

/// Allocation offset of the first byte of the segment's first column.
pub fn block_offset(rows: usize, rect: Rect, segment: Segment) -> usize {
    DATA_INDEX + (rect.y1 + segment.first) * rows
}

/// Paint every cell of `rect` inside `segment`.
///
/// `block` holds exactly the segment's columns, i.e. the allocation bytes
/// starting at [`block_offset`] and spanning `segment.width() * rows`.
/// Nothing outside the block is touched.
pub fn fill_segment(block: &mut [u8], rows: usize, rect: Rect, segment: Segment) {
    debug_assert_eq!(block.len(), segment.width() * rows);

    let base = block_offset(rows, rect, segment);
    for run in column_runs(rows, rect, segment) {
        block[run.start - base..run.end - base].fill(WHITE);
    }
}
