use std::num::NonZeroUsize;

use nosync_frame::segment::is_disjoint_cover;
use nosync_frame::{BLACK, DATA_INDEX, DrawOptions, Frame, Rect, WHITE, WorkerLimit, plan_segments};
use proptest::prelude::*;

fn options(workers: usize) -> DrawOptions {
    DrawOptions::with_workers(workers).max_workers(WorkerLimit::Fixed(NonZeroUsize::new(8).unwrap()))
}

/// A frame size plus a rect that fits it.
fn frame_and_rect() -> impl Strategy<Value = (usize, usize, Rect)> {
    (1usize..40, 1usize..40).prop_flat_map(|(rows, cols)| {
        (0..rows, 0..rows, 0..cols, 0..cols).prop_map(move |(a, b, c, d)| {
            (rows, cols, Rect::new(a.min(b), c.min(d), a.max(b), c.max(d)))
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fresh_frame_is_black_with_round_tripping_header(rows in 1usize..200, cols in 1usize..200) {
        let frame = Frame::new(rows, cols);
        prop_assert_eq!(frame.dimensions().unwrap(), (rows, cols));
        prop_assert_eq!(frame.as_bytes().unwrap().len(), DATA_INDEX + rows * cols);
        prop_assert!(frame.data().unwrap().iter().all(|&c| c == BLACK));
    }

    #[test]
    fn plan_is_a_balanced_disjoint_cover((width, workers) in (1usize..500).prop_flat_map(|w| (Just(w), 1..=w))) {
        let segments = plan_segments(width, workers).unwrap();
        prop_assert_eq!(segments.len(), workers);
        prop_assert!(is_disjoint_cover(&segments, width));

        // Wider segments come first.
        let remainder = width % workers;
        for (i, s) in segments.iter().enumerate() {
            let expected = width / workers + usize::from(i < remainder);
            prop_assert_eq!(s.width(), expected);
        }
    }

    #[test]
    fn draw_paints_inside_and_leaves_outside((rows, cols, rect) in frame_and_rect(), k in 0usize..10) {
        let mut frame = Frame::new(rows, cols);
        // Pre-paint a stripe so "unchanged" covers both cell values.
        frame.draw(Rect::new(0, 0, rows - 1, 0), 1).unwrap();
        let before = frame.data().unwrap().to_vec();

        frame.draw_with(rect, &options(k)).unwrap();

        let after = frame.data().unwrap();
        for y in 0..cols {
            for x in 0..rows {
                let i = x + y * rows;
                if rect.contains(x, y) {
                    prop_assert_eq!(after[i], WHITE);
                } else {
                    prop_assert_eq!(after[i], before[i]);
                }
            }
        }
    }

    #[test]
    fn worker_count_is_not_observable((rows, cols, rect) in frame_and_rect(), k in 2usize..10) {
        let mut single = Frame::new(rows, cols);
        let mut many = Frame::new(rows, cols);
        single.draw_with(rect, &options(1)).unwrap();
        many.draw_with(rect, &options(k)).unwrap();
        prop_assert_eq!(single.as_bytes().unwrap(), many.as_bytes().unwrap());
    }

    #[test]
    fn drawing_twice_is_idempotent((rows, cols, rect) in frame_and_rect(), k in 1usize..10) {
        let mut frame = Frame::new(rows, cols);
        frame.draw_with(rect, &options(k)).unwrap();
        let once = frame.as_bytes().unwrap().to_vec();
        frame.draw_with(rect, &options(k)).unwrap();
        prop_assert_eq!(frame.as_bytes().unwrap(), &once[..]);
    }

    #[test]
    fn rects_past_the_edge_are_rejected(rows in 1usize..30, cols in 1usize..30, over in 0usize..5) {
        let mut frame = Frame::new(rows, cols);
        prop_assert!(frame.draw(Rect::new(0, 0, rows + over, cols - 1), 2).is_err());
        prop_assert!(frame.draw(Rect::new(0, 0, rows - 1, cols + over), 2).is_err());
        prop_assert_eq!(frame.count_cells(BLACK).unwrap(), rows * cols);
    }
}
