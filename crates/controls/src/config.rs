//! Timing and scaling constants for the dials and switches.
//!
//! All values are the ones tuned on the reference appliance. [`Timing`]
//! groups the durations so the embedding firmware (and tests) can override
//! them without touching the task code.

use embassy_time::Duration;

// Dials

/// Pulse counts per mechanical detent (both edges of both channels).
pub const COUNTS_PER_DETENT: i32 = 4;

/// Volume units per detent of the volume dial.
pub const VOLUME_STEP: i32 = 5;

/// Volume used when nothing valid is persisted.
pub const DEFAULT_VOLUME: u8 = 60;

/// Volume dial poll period (ms).
pub const VOLUME_POLL_MS: u64 = 100;

/// Station dial poll period while the user is browsing (ms).
pub const STATION_FAST_POLL_MS: u64 = 20;

/// Station dial poll period while settled (ms).
pub const STATION_SLOW_POLL_MS: u64 = 200;

/// Quiet period after the last station detent before the station is switched (ms).
pub const STATION_SETTLE_MS: u64 = 2000;

// Push switches

/// Volume switch poll period while idle (ms).
pub const VOLUME_SWITCH_POLL_MS: u64 = 20;

/// Station switch poll period while idle (ms).
pub const STATION_SWITCH_POLL_MS: u64 = 100;

/// Sample period while a gesture is in progress (ms).
pub const GESTURE_SAMPLE_MS: u64 = 10;

/// Switch debounce time (ms).
pub const DEBOUNCE_MS: u64 = 50;

/// Window after a release in which a second press makes a double click (ms).
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 300;

/// Hold time that turns a press into a long press (ms).
pub const LONG_PRESS_MS: u64 = 1500;

// Display

/// How long the IP screen stays up after a short press (ms).
pub const IP_SCREEN_MS: u64 = 3000;

/// How long the reboot notice is shown before restarting (ms).
pub const REBOOT_NOTICE_MS: u64 = 100;

/// Depth of the display update queue. Updates beyond this are dropped.
pub const UI_QUEUE_DEPTH: usize = 10;

/// Poll and hold durations used by the task loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Volume dial poll period.
    pub volume_poll: Duration,
    /// Station dial poll period while browsing.
    pub station_fast_poll: Duration,
    /// Station dial poll period while settled.
    pub station_slow_poll: Duration,
    /// Quiet period that settles a station selection.
    pub station_settle: Duration,
    /// Volume switch poll period while idle.
    pub volume_switch_poll: Duration,
    /// Station switch poll period while idle.
    pub station_switch_poll: Duration,
    /// Switch sample period during a gesture.
    pub gesture_sample: Duration,
    /// Switch debounce time.
    pub debounce: Duration,
    /// Double-click window.
    pub double_click_window: Duration,
    /// Long-press threshold.
    pub long_press: Duration,
    /// IP screen hold time.
    pub ip_screen: Duration,
    /// Reboot notice hold time.
    pub reboot_notice: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            volume_poll: Duration::from_millis(VOLUME_POLL_MS),
            station_fast_poll: Duration::from_millis(STATION_FAST_POLL_MS),
            station_slow_poll: Duration::from_millis(STATION_SLOW_POLL_MS),
            station_settle: Duration::from_millis(STATION_SETTLE_MS),
            volume_switch_poll: Duration::from_millis(VOLUME_SWITCH_POLL_MS),
            station_switch_poll: Duration::from_millis(STATION_SWITCH_POLL_MS),
            gesture_sample: Duration::from_millis(GESTURE_SAMPLE_MS),
            debounce: Duration::from_millis(DEBOUNCE_MS),
            double_click_window: Duration::from_millis(DOUBLE_CLICK_WINDOW_MS),
            long_press: Duration::from_millis(LONG_PRESS_MS),
            ip_screen: Duration::from_millis(IP_SCREEN_MS),
            reboot_notice: Duration::from_millis(REBOOT_NOTICE_MS),
        }
    }
}
