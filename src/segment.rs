// Split a column span into one contiguous range per worker, so workers never
// share a column and need no synchronization.

use crate::error::{Error, Result};
use crate::types::Segment;

/// Split columns `0..width` into `workers` contiguous, non-empty segments.
///
/// Every segment gets `width / workers` columns; the first `width % workers`
/// segments get one extra. Segment `k` starts right after segment `k - 1`.
/// Requires `1 <= workers <= width`.
pub fn plan_segments(width: usize, workers: usize) -> Result<Vec<Segment>> {
    if workers == 0 || workers > width {
        return Err(Error::InvalidWorkerCount { width, workers });
    }

    let base = width / workers;
    let remainder = width % workers;

    let mut segments = Vec::with_capacity(workers);
    let mut first = 0;
    for i in 0..workers {
        let size = if i < remainder { base + 1 } else { base };
        segments.push(Segment::new(first, first + size - 1));
        first += size;
    }

    Ok(segments)
}

/// True when `segments` are non-empty, in order, gap-free, cover exactly
/// `0..width`, and differ in width by at most one.
pub fn is_disjoint_cover(segments: &[Segment], width: usize) -> bool {
    let mut next = 0;
    for segment in segments {
        if segment.first != next || segment.last < segment.first {
            return false;
        }
        next = segment.last + 1;
    }
    if next != width || segments.is_empty() {
        return false;
    }

    let widths = segments.iter().map(Segment::width);
    let (min, max) = widths.fold((usize::MAX, 0), |(lo, hi), w| (lo.min(w), hi.max(w)));
    max - min <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(segments: &[Segment]) -> Vec<(usize, usize)> {
        segments.iter().map(|s| (s.first, s.last)).collect()
    }

    #[test]
    fn remainder_goes_to_the_lowest_indices() {
        assert_eq!(pairs(&plan_segments(13, 2).unwrap()), [(0, 6), (7, 12)]);
        assert_eq!(
            pairs(&plan_segments(13, 4).unwrap()),
            [(0, 3), (4, 6), (7, 9), (10, 12)]
        );
    }

    #[test]
    fn one_column_per_worker() {
        assert_eq!(
            pairs(&plan_segments(5, 5).unwrap()),
            [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]
        );
    }

    #[test]
    fn single_worker_covers_everything() {
        assert_eq!(pairs(&plan_segments(1024, 1).unwrap()), [(0, 1023)]);
    }

    #[test]
    fn rejects_zero_or_too_many_workers() {
        assert!(matches!(
            plan_segments(4, 0),
            Err(Error::InvalidWorkerCount { width: 4, workers: 0 })
        ));
        assert!(matches!(
            plan_segments(4, 5),
            Err(Error::InvalidWorkerCount { width: 4, workers: 5 })
        ));
        assert!(plan_segments(0, 1).is_err());
    }

    #[test]
    fn cover_check_spots_gaps_and_overlaps() {
        let good = plan_segments(10, 3).unwrap();
        assert!(is_disjoint_cover(&good, 10));
        assert!(!is_disjoint_cover(&good, 11));
        assert!(!is_disjoint_cover(&[Segment::new(0, 4), Segment::new(6, 9)], 10));
        assert!(!is_disjoint_cover(&[Segment::new(0, 5), Segment::new(5, 9)], 10));
        assert!(!is_disjoint_cover(&[Segment::new(0, 7), Segment::new(8, 9)], 10));
        assert!(!is_disjoint_cover(&[], 0));
    }
}
