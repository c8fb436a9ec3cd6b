//! Property-based tests for volume scale conversion.
//! Verifies invariants hold for ALL inputs, not just fixed examples.

use platform::audio_types::VolumePercent;

proptest::proptest! {
    /// VolumePercent::new never panics for any u8 input (clamps to 100).
    #[test]
    fn volume_percent_new_never_exceeds_100(pct in 0u8..=255u8) {
        assert!(VolumePercent::new(pct).get() <= 100);
    }

    /// Saturating conversion always lands in 0..=100 and is the identity inside it.
    #[test]
    fn saturating_from_i32_is_clamp(raw in i32::MIN..=i32::MAX) {
        let v = VolumePercent::saturating_from_i32(raw);
        assert!(v.get() <= 100);
        if (0..=100).contains(&raw) {
            assert_eq!(i32::from(v), raw);
        }
    }

    /// Strict conversion succeeds exactly on 0..=100.
    #[test]
    fn try_from_i32_ok_iff_in_range(raw in -1000i32..=1000i32) {
        assert_eq!(VolumePercent::try_from_i32(raw).is_ok(), (0..=100).contains(&raw));
    }
}
