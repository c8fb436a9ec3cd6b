//! Station dial interpretation: an index that wraps around the catalog.

use crate::config::COUNTS_PER_DETENT;

/// Tracks a wrapping index in `0..len` from relative detents.
///
/// Only the difference between successive step counts matters, so the
/// index can be overwritten with [`CyclicCounter::resync`] without
/// disturbing the dial's reference position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclicCounter {
    index: usize,
    len: usize,
    last_steps: i32,
    detents: i32,
}

impl CyclicCounter {
    /// Start at `index` over `len` entries, with the dial currently reading
    /// `raw_count`. A zero `len` is treated as 1; `index` is wrapped into range.
    pub fn new(len: usize, index: usize, raw_count: i32) -> Self {
        Self::with_detents(len, index, raw_count, COUNTS_PER_DETENT)
    }

    /// As [`CyclicCounter::new`] with a custom counts-per-detent (zero treated as 1).
    pub fn with_detents(len: usize, index: usize, raw_count: i32, detents: i32) -> Self {
        let len = len.max(1);
        let detents = detents.max(1);
        Self {
            index: index.checked_rem(len).unwrap_or(0),
            len,
            last_steps: raw_count.checked_div(detents).unwrap_or(0),
            detents,
        }
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; an empty range is widened to one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Overwrite the index after a change made elsewhere. The step reference
    /// is left alone so the next poll still reports only new detents.
    pub fn resync(&mut self, index: usize) {
        self.index = index.checked_rem(self.len).unwrap_or(0);
    }

    /// Evaluate a raw count. Returns the index and whether it moved.
    pub fn poll(&mut self, raw_count: i32) -> (usize, bool) {
        let steps = raw_count.checked_div(self.detents).unwrap_or(0);
        let delta = i64::from(steps).saturating_sub(i64::from(self.last_steps));
        if delta == 0 {
            return (self.index, false);
        }
        self.last_steps = steps;

        let len = i64::try_from(self.len).unwrap_or(i64::MAX);
        let current = i64::try_from(self.index).unwrap_or(0);
        let wrapped = current.saturating_add(delta).rem_euclid(len);
        self.index = usize::try_from(wrapped).unwrap_or(0);
        (self.index, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_backwards_from_zero() {
        let mut c = CyclicCounter::new(5, 0, 0);
        assert_eq!(c.poll(-4), (4, true));
        assert_eq!(c.poll(-8), (3, true));
    }

    #[test]
    fn test_wraps_forwards_past_end() {
        let mut c = CyclicCounter::new(3, 2, 0);
        assert_eq!(c.poll(4), (0, true));
        assert_eq!(c.poll(4), (0, false));
    }

    #[test]
    fn test_large_jump_wraps_modulo_len() {
        let mut c = CyclicCounter::new(4, 1, 0);
        // 10 detents forward: (1 + 10) mod 4 = 3.
        assert_eq!(c.poll(40), (3, true));
    }

    #[test]
    fn test_starts_relative_to_initial_count() {
        let mut c = CyclicCounter::new(10, 2, 400);
        assert_eq!(c.poll(400), (2, false));
        assert_eq!(c.poll(404), (3, true));
    }

    #[test]
    fn test_resync_keeps_step_reference() {
        let mut c = CyclicCounter::new(8, 0, 0);
        assert_eq!(c.poll(8), (2, true));
        c.resync(6);
        assert_eq!(c.poll(8), (6, false));
        assert_eq!(c.poll(12), (7, true));
    }

    #[test]
    fn test_single_entry_never_moves() {
        let mut c = CyclicCounter::new(1, 0, 0);
        assert_eq!(c.poll(4), (0, true));
        assert_eq!(c.poll(-40), (0, true));
    }

    #[test]
    fn test_out_of_range_start_is_wrapped() {
        let c = CyclicCounter::new(3, 7, 0);
        assert_eq!(c.index(), 1);
    }
}
