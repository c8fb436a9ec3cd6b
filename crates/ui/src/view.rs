//! Display mirror state: folds [`UiUpdate`]s into what the renderer draws.
//!
//! The model is a best-effort copy of the control state: updates dropped by a
//! full queue simply leave an older value on screen until the next change.

use crate::screen::Screen;
use crate::update::{IpLabel, UiUpdate};

/// Everything the display shows, as last reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayModel {
    screen: Screen,
    station_name: &'static str,
    station_origin: &'static str,
    bitrate_kbps: u32,
    volume: u8,
    muted: bool,
    roller: usize,
    ip: IpLabel,
}

impl DisplayModel {
    /// Empty model on the home screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one update.
    pub fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::Bitrate(kbps) => self.bitrate_kbps = kbps,
            UiUpdate::StationName(name) => self.station_name = name,
            UiUpdate::StationOrigin(origin) => self.station_origin = origin,
            UiUpdate::Volume(volume) => self.volume = volume.min(100),
            UiUpdate::StationRoller(index) => self.roller = index,
            UiUpdate::Mute(muted) => self.muted = muted,
            UiUpdate::Screen(screen) => self.screen = screen,
            UiUpdate::IpAddress(ip) => self.ip = ip,
        }
    }

    /// Apply every pending update `next` yields, without waiting for more.
    ///
    /// Returns the number of updates applied.
    pub fn drain(&mut self, mut next: impl FnMut() -> Option<UiUpdate>) -> usize {
        let mut applied: usize = 0;
        while let Some(update) = next() {
            self.apply(update);
            applied = applied.saturating_add(1);
        }
        applied
    }

    /// Current view.
    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Station call sign on the home screen.
    #[must_use]
    pub fn station_name(&self) -> &'static str {
        self.station_name
    }

    /// Station origin on the home screen.
    #[must_use]
    pub fn station_origin(&self) -> &'static str {
        self.station_origin
    }

    /// Bitrate label in kbit/s.
    #[must_use]
    pub fn bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
    }

    /// Volume slider position.
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Whether the mute glyph is shown.
    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Highlighted roller entry.
    #[must_use]
    pub fn roller(&self) -> usize {
        self.roller
    }

    /// IP screen text.
    #[must_use]
    pub fn ip(&self) -> &str {
        self.ip.as_str()
    }
}
