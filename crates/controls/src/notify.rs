//! Fan-out of state changes to the display.
//!
//! Producers never wait on the display: every notification is a `try_send`
//! into a bounded channel and is dropped when the channel is full.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, Sender};
use ui::{Screen, UiUpdate};

use crate::config::UI_QUEUE_DEPTH;

/// Channel carrying display updates from the control tasks to the display task.
pub type UiChannel<M> = Channel<M, UiUpdate, UI_QUEUE_DEPTH>;

/// Non-blocking producer handle for [`UiChannel`].
pub struct Notifier<'a, M: RawMutex> {
    tx: Sender<'a, M, UiUpdate, UI_QUEUE_DEPTH>,
}

impl<M: RawMutex> Clone for Notifier<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex> Copy for Notifier<'_, M> {}

impl<'a, M: RawMutex> Notifier<'a, M> {
    /// Producer for `channel`.
    pub fn new(channel: &'a UiChannel<M>) -> Self {
        Self {
            tx: channel.sender(),
        }
    }

    /// Enqueue `update`. Returns `false` if it was dropped because the queue is full.
    pub fn send(&self, update: UiUpdate) -> bool {
        match self.tx.try_send(update) {
            Ok(()) => true,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("display queue full, update dropped");
                false
            }
        }
    }

    /// Volume slider.
    pub fn notify_volume(&self, volume: u8) -> bool {
        self.send(UiUpdate::Volume(volume))
    }

    /// Mute glyph.
    pub fn notify_mute(&self, muted: bool) -> bool {
        self.send(UiUpdate::Mute(muted))
    }

    /// Station call sign.
    pub fn notify_station_name(&self, name: &'static str) -> bool {
        self.send(UiUpdate::StationName(name))
    }

    /// Station origin.
    pub fn notify_station_origin(&self, origin: &'static str) -> bool {
        self.send(UiUpdate::StationOrigin(origin))
    }

    /// Stream bitrate in kbit/s.
    pub fn notify_bitrate(&self, kbps: u32) -> bool {
        self.send(UiUpdate::Bitrate(kbps))
    }

    /// Highlighted roller entry.
    pub fn notify_station_roller(&self, index: usize) -> bool {
        self.send(UiUpdate::StationRoller(index))
    }

    /// Active view.
    pub fn notify_screen(&self, screen: Screen) -> bool {
        self.send(UiUpdate::Screen(screen))
    }

    /// IP screen text; `None` shows "No Netif".
    pub fn notify_ip(&self, address: Option<[u8; 4]>) -> bool {
        self.send(UiUpdate::ip_address(address))
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;

    #[test]
    fn test_updates_arrive_in_order() {
        let channel = UiChannel::<NoopRawMutex>::new();
        let notifier = Notifier::new(&channel);
        assert!(notifier.notify_mute(false));
        assert!(notifier.notify_volume(65));
        assert_eq!(channel.try_receive().ok(), Some(UiUpdate::Mute(false)));
        assert_eq!(channel.try_receive().ok(), Some(UiUpdate::Volume(65)));
        assert!(channel.try_receive().is_err());
    }

    #[test]
    fn test_full_queue_drops_without_blocking() {
        let channel = UiChannel::<NoopRawMutex>::new();
        let notifier = Notifier::new(&channel);
        for i in 0..UI_QUEUE_DEPTH {
            assert!(notifier.notify_station_roller(i));
        }
        assert!(!notifier.notify_station_roller(99));
        assert_eq!(channel.len(), UI_QUEUE_DEPTH);
        assert_eq!(channel.try_receive().ok(), Some(UiUpdate::StationRoller(0)));
    }
}
