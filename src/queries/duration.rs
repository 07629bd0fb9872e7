// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Frame timing from pairs of timestamp queries.
//!
//! GPU results lag the CPU by a few frames, so a single pair of timestamps cannot be read back
//! in the frame that wrote it.  [`DurationQueryHelper`] keeps a ring of pairs.  Each frame ends
//! a start and an end timestamp in the next free pair, then polls the oldest pair still in
//! flight.  Polling never blocks.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use states_and_views::queries::duration::{DurationQueryHelper, TimestampQuery};
//!
//! /// A timestamp that is readable as soon as it is ended.
//! struct Immediate { clock: Rc<Cell<u64>>, ticks: u64 }
//! impl TimestampQuery for Immediate {
//!     fn end(&mut self) {
//!         self.clock.set(self.clock.get() + 10);
//!         self.ticks = self.clock.get();
//!     }
//!     fn timestamp(&mut self) -> Option<(u64, u64)> { Some((self.ticks, 1000)) }
//! }
//!
//! let clock = Rc::new(Cell::new(0));
//! let mut helper = DurationQueryHelper::new(2, || Immediate { clock: clock.clone(), ticks: 0 });
//! helper.begin();
//! assert_eq!(helper.end(), Some(0.01));
//! ```

/// A timestamp query the helper can end and poll.
pub trait TimestampQuery {
    /// Records the end marker.  Any earlier result is discarded.
    fn end(&mut self);
    /// `(counter, frequency)` once the GPU has written the timestamp, or `None` while pending.
    fn timestamp(&mut self) -> Option<(u64, u64)>;
}

struct QueryPair<Q> {
    start: Q,
    end: Q,
}

/// Measures GPU time between [`begin`](Self::begin) and [`end`](Self::end) over a ring of
/// timestamp query pairs.
pub struct DurationQueryHelper<Q: TimestampQuery> {
    pairs: Vec<QueryPair<Q>>,
    next: usize,
    in_flight: usize,
}

impl<Q: TimestampQuery> DurationQueryHelper<Q> {
    /// Creates `num_pairs` start/end pairs with `make_query`.  At least one pair is created.
    ///
    /// The ring should be at least as deep as the number of frames the GPU may lag behind.
    pub fn new(num_pairs: usize, mut make_query: impl FnMut() -> Q) -> Self {
        let num_pairs = num_pairs.max(1);
        let pairs = (0..num_pairs)
            .map(|_| QueryPair {
                start: make_query(),
                end: make_query(),
            })
            .collect();
        DurationQueryHelper {
            pairs,
            next: 0,
            in_flight: 0,
        }
    }

    pub fn num_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Pairs that were ended but not yet read back.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Records the start timestamp of the current frame.
    pub fn begin(&mut self) {
        self.pairs[self.next].start.end();
    }

    /// Records the end timestamp of the current frame and polls the oldest pair in flight.
    ///
    /// Returns the oldest pair's duration in seconds, or `None` if either of its timestamps
    /// is still pending.
    pub fn end(&mut self) -> Option<f64> {
        let n = self.pairs.len();
        self.pairs[self.next].end.end();
        self.next = (self.next + 1) % n;
        if self.in_flight == n {
            logwise::warn_sync!(
                "All {n} duration query pairs are in flight; the oldest result was overwritten",
                n = n
            );
        } else {
            self.in_flight += 1;
        }

        let oldest = (self.next + n - self.in_flight) % n;
        let pair = &mut self.pairs[oldest];
        let (start, _) = pair.start.timestamp()?;
        let (end, frequency) = pair.end.timestamp()?;
        self.in_flight -= 1;
        if frequency == 0 {
            logwise::error_sync!("Timestamp frequency is zero");
            return None;
        }
        Some(end.saturating_sub(start) as f64 / frequency as f64)
    }
}
