//! Cross-task control state.
//!
//! Each field has one authoritative writer (volume: volume dial; mute:
//! volume switch, cleared by the volume dial; station: station dial). Readers
//! may observe a value that is being replaced; the display and the settings
//! store are mirrors, so eventual consistency is enough.

use core::sync::atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

use platform::VolumePercent;

/// Snapshot of the user-facing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Output volume.
    pub volume: VolumePercent,
    /// Output silenced regardless of volume.
    pub muted: bool,
    /// Active catalog index.
    pub station: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: VolumePercent::new(crate::config::DEFAULT_VOLUME),
            muted: false,
            station: 0,
        }
    }
}

/// Lock-free shared state. Lives in a `static` or on the embedding task's
/// stack and is handed to every task by reference.
#[derive(Debug)]
pub struct ControlState {
    volume: AtomicU8,
    muted: AtomicBool,
    station: AtomicUsize,
}

impl ControlState {
    /// State initialised from `settings`.
    pub const fn new(settings: Settings) -> Self {
        Self {
            volume: AtomicU8::new(settings.volume.get()),
            muted: AtomicBool::new(settings.muted),
            station: AtomicUsize::new(settings.station),
        }
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Settings {
        Settings {
            volume: self.volume(),
            muted: self.is_muted(),
            station: self.station(),
        }
    }

    /// Current volume.
    pub fn volume(&self) -> VolumePercent {
        VolumePercent::new(self.volume.load(Ordering::Acquire))
    }

    /// Publish a new volume.
    pub fn set_volume(&self, volume: VolumePercent) {
        self.volume.store(volume.get(), Ordering::Release);
    }

    /// Current mute flag.
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Acquire)
    }

    /// Flip the mute flag. Returns the new value.
    pub fn toggle_mute(&self) -> bool {
        !self.muted.fetch_xor(true, Ordering::AcqRel)
    }

    /// Clear the mute flag. Returns `true` if it was set.
    pub fn unmute(&self) -> bool {
        self.muted.swap(false, Ordering::AcqRel)
    }

    /// Active station index.
    pub fn station(&self) -> usize {
        self.station.load(Ordering::Acquire)
    }

    /// Publish a new active station. Also the resynchronisation path for
    /// station changes made outside the station dial.
    pub fn set_station(&self, index: usize) {
        self.station.store(index, Ordering::Release);
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let state = ControlState::default();
        assert_eq!(
            state.snapshot(),
            Settings {
                volume: VolumePercent::new(60),
                muted: false,
                station: 0
            }
        );
    }

    #[test]
    fn test_toggle_mute_returns_new_value() {
        let state = ControlState::default();
        assert!(state.toggle_mute());
        assert!(state.is_muted());
        assert!(!state.toggle_mute());
        assert!(!state.is_muted());
    }

    #[test]
    fn test_unmute_reports_previous_value() {
        let state = ControlState::default();
        assert!(!state.unmute());
        state.toggle_mute();
        assert!(state.unmute());
        assert!(!state.is_muted());
    }
}
