//! Type system enforcement tests for the volume newtype and setting keys.
#![allow(clippy::unwrap_used)]

// ── VolumePercent ────────────────────────────────────────────────────────────

#[test]
fn volume_percent_new_clamps_over_100() {
    use platform::audio_types::VolumePercent;
    let v = VolumePercent::new(150);
    assert_eq!(v.get(), 100, "VolumePercent::new(150) should clamp to 100");
}

#[test]
fn volume_percent_saturates_negative_to_0() {
    use platform::audio_types::VolumePercent;
    assert_eq!(VolumePercent::saturating_from_i32(-20).get(), 0);
    assert_eq!(VolumePercent::saturating_from_i32(250).get(), 100);
    assert_eq!(VolumePercent::saturating_from_i32(65).get(), 65);
}

#[test]
fn volume_percent_try_from_i32_rejects_out_of_range() {
    use platform::audio_types::VolumePercent;
    let err = VolumePercent::try_from_i32(101).unwrap_err();
    assert_eq!((err.value, err.min, err.max), (101, 0, 100));
    assert!(VolumePercent::try_from_i32(-1).is_err());
}

#[test]
fn volume_percent_try_from_i32_accepts_valid_range() {
    use platform::audio_types::VolumePercent;
    assert_eq!(VolumePercent::try_from_i32(0), Ok(VolumePercent::MIN));
    assert_eq!(VolumePercent::try_from_i32(100), Ok(VolumePercent::MAX));
    assert_eq!(VolumePercent::try_from_i32(60).map(VolumePercent::get), Ok(60));
}

#[test]
fn volume_percent_is_one_byte() {
    use platform::audio_types::VolumePercent;
    assert_eq!(core::mem::size_of::<VolumePercent>(), 1);
}

// ── SettingKey ───────────────────────────────────────────────────────────────

#[test]
fn setting_keys_match_stored_names() {
    use platform::SettingKey;
    assert_eq!(SettingKey::Volume.as_str(), "volume");
    assert_eq!(SettingKey::MuteState.as_str(), "mute_state");
    assert_eq!(SettingKey::StationIndex.as_str(), "station_idx");
}
