//! Best-effort settings persistence.
//!
//! Every write commits one key on its own. Failures are logged and swallowed:
//! losing a preference across a reboot is acceptable, stalling a dial is not.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use platform::{KeyValueStore, SettingKey, VolumePercent};

use crate::catalog::StationCatalog;
use crate::state::Settings;

/// Shared write-through handle to the settings store.
pub struct Persistence<'a, M: RawMutex, S> {
    store: &'a Mutex<M, S>,
}

impl<M: RawMutex, S> Clone for Persistence<'_, M, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, S> Copy for Persistence<'_, M, S> {}

impl<'a, M: RawMutex, S: KeyValueStore> Persistence<'a, M, S> {
    /// Handle writing through `store`.
    pub fn new(store: &'a Mutex<M, S>) -> Self {
        Self { store }
    }

    /// Store the volume. Returns `false` if the write failed.
    pub async fn persist_volume(&self, volume: VolumePercent) -> bool {
        self.write_i32(SettingKey::Volume, i32::from(volume)).await
    }

    /// Store the mute flag. Returns `false` if the write failed.
    pub async fn persist_mute(&self, muted: bool) -> bool {
        let mut store = self.store.lock().await;
        match store.set_u8(SettingKey::MuteState, u8::from(muted)) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "persist {} failed: {}",
                    SettingKey::MuteState.as_str(),
                    defmt::Debug2Format(&_e)
                );
                false
            }
        }
    }

    /// Store the active station index. Returns `false` if the write failed.
    pub async fn persist_station(&self, index: usize) -> bool {
        let Ok(value) = i32::try_from(index) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("station index {} not storable", index);
            return false;
        };
        self.write_i32(SettingKey::StationIndex, value).await
    }

    async fn write_i32(&self, key: SettingKey, value: i32) -> bool {
        let mut store = self.store.lock().await;
        match store.set_i32(key, value) {
            Ok(()) => true,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "persist {}={} failed: {}",
                    key.as_str(),
                    value,
                    defmt::Debug2Format(&_e)
                );
                false
            }
        }
    }
}

/// Read the persisted settings, substituting defaults for anything missing,
/// unreadable or out of range. Called once at boot, before the store is shared.
pub fn load_settings<S: KeyValueStore>(store: &mut S, catalog: &StationCatalog) -> Settings {
    let defaults = Settings::default();

    let volume = match read_i32(store, SettingKey::Volume) {
        Some(raw) => VolumePercent::try_from_i32(raw).unwrap_or_else(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("stored volume rejected: {}", _e);
            defaults.volume
        }),
        None => defaults.volume,
    };

    let muted = match store.get_u8(SettingKey::MuteState) {
        Ok(Some(raw)) => raw != 0,
        Ok(None) => defaults.muted,
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "read {} failed: {}",
                SettingKey::MuteState.as_str(),
                defmt::Debug2Format(&_e)
            );
            defaults.muted
        }
    };

    let station = match read_i32(store, SettingKey::StationIndex) {
        Some(raw) => match usize::try_from(raw) {
            Ok(index) if index < catalog.len() => index,
            _ => {
                #[cfg(feature = "defmt")]
                defmt::warn!("stored station index {} out of range, using 0", raw);
                defaults.station
            }
        },
        None => defaults.station,
    };

    let settings = Settings {
        volume,
        muted,
        station,
    };

    #[cfg(feature = "defmt")]
    defmt::info!("settings restored: {}", settings);

    settings
}

fn read_i32<S: KeyValueStore>(store: &mut S, key: SettingKey) -> Option<i32> {
    store.get_i32(key).unwrap_or_else(|_e| {
        #[cfg(feature = "defmt")]
        defmt::warn!("read {} failed: {}", key.as_str(), defmt::Debug2Format(&_e));
        None
    })
}
