//! Volume dial interpretation: a 0–100 value driven by relative detents.

use platform::VolumePercent;

use crate::config::{COUNTS_PER_DETENT, VOLUME_STEP};

/// Upper bound of the tracked value.
const CEILING: i32 = 100;

/// Maps the raw pulse count of a dial to a value clamped to 0–100.
///
/// `value = (raw / detents) * step + offset`. When the candidate leaves the
/// range the offset is rebased so that the current physical position maps
/// exactly onto the bound: turning back by one detent moves off the bound
/// immediately, without winding back the excess first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    value: i32,
    offset: i32,
    step_size: i32,
    detents: i32,
}

impl BoundedCounter {
    /// Start at `initial` with the reference scaling (4 counts per detent,
    /// 5 units per detent), assuming the pulse counter was just cleared.
    pub fn new(initial: VolumePercent) -> Self {
        Self::with_scaling(initial, VOLUME_STEP, COUNTS_PER_DETENT)
    }

    /// Start at `initial` with custom scaling. A zero `detents` is treated as 1.
    pub fn with_scaling(initial: VolumePercent, step_size: i32, detents: i32) -> Self {
        let value = i32::from(initial);
        Self {
            value,
            offset: value,
            step_size,
            detents: detents.max(1),
        }
    }

    /// Current value.
    pub fn value(&self) -> VolumePercent {
        VolumePercent::saturating_from_i32(self.value)
    }

    /// Evaluate a raw count. Returns the (possibly unchanged) value and
    /// whether it differs from the previous one.
    pub fn poll(&mut self, raw_count: i32) -> (VolumePercent, bool) {
        // Truncating division: partial detents are ignored.
        let steps = raw_count.checked_div(self.detents).unwrap_or(0);
        let scaled = steps.saturating_mul(self.step_size);
        let candidate = scaled.saturating_add(self.offset);

        let next = if candidate < 0 {
            self.offset = scaled.saturating_neg();
            0
        } else if candidate > CEILING {
            self.offset = CEILING.saturating_sub(scaled);
            CEILING
        } else {
            candidate
        };

        let changed = next != self.value;
        self.value = next;
        (self.value(), changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(initial: u8) -> BoundedCounter {
        BoundedCounter::new(VolumePercent::new(initial))
    }

    fn values(c: &mut BoundedCounter, raws: &[i32]) -> Vec<u8> {
        raws.iter().map(|&raw| c.poll(raw).0.get()).collect()
    }

    #[test]
    fn test_steps_of_five_per_detent() {
        let mut c = counter(60);
        assert_eq!(values(&mut c, &[0, 4, 8, -80]), vec![60, 65, 70, 0]);
    }

    #[test]
    fn test_partial_detents_ignored() {
        let mut c = counter(60);
        assert_eq!(c.poll(3), (VolumePercent::new(60), false));
        assert_eq!(c.poll(-3), (VolumePercent::new(60), false));
        assert_eq!(c.poll(4), (VolumePercent::new(65), true));
    }

    #[test]
    fn test_low_clamp_rebases_offset() {
        let mut c = counter(10);
        // 6 detents down from 10 would be -20.
        assert_eq!(c.poll(-24), (VolumePercent::new(0), true));
        assert_eq!(c.poll(-24), (VolumePercent::new(0), false));
        // One detent back up leaves the bound immediately.
        assert_eq!(c.poll(-20), (VolumePercent::new(5), true));
    }

    #[test]
    fn test_high_clamp_rebases_offset() {
        let mut c = counter(90);
        assert_eq!(c.poll(20), (VolumePercent::new(100), true));
        assert_eq!(c.poll(40), (VolumePercent::new(100), false));
        assert_eq!(c.poll(36), (VolumePercent::new(95), true));
    }

    #[test]
    fn test_zero_detents_treated_as_one() {
        let mut c = BoundedCounter::with_scaling(VolumePercent::new(50), 1, 0);
        assert_eq!(c.poll(3).0.get(), 53);
    }
}
