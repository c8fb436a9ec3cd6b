//! Settings store abstraction
//!
//! A small key-value namespace in non-volatile memory. Every `set_*` call is
//! committed on its own; there are no transactions spanning keys.

/// Keys the control core persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingKey {
    /// Last volume, `i32` in 0–100.
    Volume,
    /// Mute flag, `u8` (0 = unmuted).
    MuteState,
    /// Active station, `i32` index into the catalog.
    StationIndex,
}

impl SettingKey {
    /// Storage key string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::MuteState => "mute_state",
            Self::StationIndex => "station_idx",
        }
    }
}

/// Key-value store for user settings.
///
/// `get_*` returns `Ok(None)` when the key was never written.
pub trait KeyValueStore {
    /// Error type
    type Error: core::fmt::Debug;

    /// Read a signed 32-bit value.
    fn get_i32(&mut self, key: SettingKey) -> Result<Option<i32>, Self::Error>;

    /// Write and commit a signed 32-bit value.
    fn set_i32(&mut self, key: SettingKey, value: i32) -> Result<(), Self::Error>;

    /// Read a byte value.
    fn get_u8(&mut self, key: SettingKey) -> Result<Option<u8>, Self::Error>;

    /// Write and commit a byte value.
    fn set_u8(&mut self, key: SettingKey, value: u8) -> Result<(), Self::Error>;
}
