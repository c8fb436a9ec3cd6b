//! Push-switch gesture classification.
//!
//! [`GestureClassifier`] is a pure state machine fed with `(level, now)`
//! samples. It never sleeps; the switch tasks decide how often to sample
//! (slowly while [`GestureClassifier::is_idle`], at the gesture sample period
//! otherwise). One physical activation yields at most one [`Gesture`].
//!
//! # Phases
//!
//! ```text
//! Idle ──press──► Debouncing ──still held──► Held ──release──► AwaitingSecond ──window──► Click
//!                     │                        │                    │
//!                   glitch                 long press          second press
//!                     ▼                        ▼                    ▼
//!                   Idle                    Lockout            Debouncing ─► Held ─release─► DoubleClick
//! ```
//!
//! After every gesture the classifier sits in `Lockout` until the switch has
//! been released for one debounce interval, so a held or bouncing switch
//! cannot start a new activation.

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;

use crate::config::Timing;
use crate::error::{ControlError, Dial};

/// A classified switch activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Single press and release, reported once any double-click window has passed.
    Click,
    /// Two presses inside the double-click window, reported on the second release.
    DoubleClick,
    /// Held past the long-press threshold, reported while still held.
    LongPress,
}

/// Which gestures a classifier recognises, and its timing windows.
///
/// Start from [`GestureConfig::new`] (clicks only) and enable the other
/// gestures with the builder methods:
///
/// ```
/// use controls::button::GestureConfig;
/// use embassy_time::Duration;
///
/// let config = GestureConfig::new(Duration::from_millis(50))
///     .double_click(Duration::from_millis(300));
/// assert!(config.long_press_threshold().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    debounce: Duration,
    double_click: Option<Duration>,
    long_press: Option<Duration>,
}

impl GestureConfig {
    /// Clicks only, with the given debounce time.
    pub const fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            double_click: None,
            long_press: None,
        }
    }

    /// Enable double clicks with the given window after the first release.
    #[must_use]
    pub const fn double_click(mut self, window: Duration) -> Self {
        self.double_click = Some(window);
        self
    }

    /// Enable long presses with the given hold threshold.
    #[must_use]
    pub const fn long_press(mut self, threshold: Duration) -> Self {
        self.long_press = Some(threshold);
        self
    }

    /// Volume switch: click toggles mute, double click drives the remote.
    pub const fn volume_switch(timing: &Timing) -> Self {
        Self::new(timing.debounce).double_click(timing.double_click_window)
    }

    /// Station switch: click shows the IP screen, long press reboots.
    pub const fn station_switch(timing: &Timing) -> Self {
        Self::new(timing.debounce).long_press(timing.long_press)
    }

    /// Debounce time.
    pub const fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Double-click window, if enabled.
    pub const fn double_click_window(&self) -> Option<Duration> {
        self.double_click
    }

    /// Long-press threshold, if enabled.
    pub const fn long_press_threshold(&self) -> Option<Duration> {
        self.long_press
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    /// Falling edge seen at `since`. `first_release` is set for the second
    /// press of a double click.
    Debouncing {
        since: Instant,
        first_release: Option<Instant>,
    },
    Held {
        pressed_at: Instant,
        first_release: Option<Instant>,
    },
    AwaitingSecond {
        released_at: Instant,
    },
    /// Gesture reported; waiting for a debounced release.
    Lockout {
        released_at: Option<Instant>,
    },
}

/// Debounce and click/double-click/long-press state machine for one switch.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    phase: Phase,
}

impl GestureClassifier {
    /// Create an idle classifier.
    pub const fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// `true` when no activation is in progress.
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Feed one sample. `pressed` is the debounced-or-not switch level
    /// (`true` = held), `now` must not go backwards between calls.
    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<Gesture> {
        let debounce = self.config.debounce;
        let (next, gesture) = match self.phase {
            Phase::Idle if pressed => (
                Phase::Debouncing {
                    since: now,
                    first_release: None,
                },
                None,
            ),
            Phase::Idle => (Phase::Idle, None),

            Phase::Debouncing {
                since,
                first_release,
            } => {
                if now.saturating_duration_since(since) < debounce {
                    (self.phase, None)
                } else if pressed {
                    (
                        Phase::Held {
                            pressed_at: since,
                            first_release,
                        },
                        None,
                    )
                } else {
                    // Glitch: fall back to where the edge came from.
                    match first_release {
                        Some(released_at) => (Phase::AwaitingSecond { released_at }, None),
                        None => (Phase::Idle, None),
                    }
                }
            }

            Phase::Held {
                pressed_at,
                first_release,
            } => self.on_held(pressed, now, pressed_at, first_release.is_some()),

            Phase::AwaitingSecond { released_at } => {
                let quiet = now.saturating_duration_since(released_at);
                let window = self.config.double_click.unwrap_or(Duration::from_ticks(0));
                if quiet >= window {
                    (Phase::Idle, Some(Gesture::Click))
                } else if pressed && quiet >= debounce {
                    (
                        Phase::Debouncing {
                            since: now,
                            first_release: Some(released_at),
                        },
                        None,
                    )
                } else {
                    (self.phase, None)
                }
            }

            Phase::Lockout { released_at } => match (pressed, released_at) {
                (true, _) => (Phase::Lockout { released_at: None }, None),
                (false, None) => (
                    Phase::Lockout {
                        released_at: Some(now),
                    },
                    None,
                ),
                (false, Some(at)) if now.saturating_duration_since(at) >= debounce => {
                    (Phase::Idle, None)
                }
                (false, Some(_)) => (self.phase, None),
            },
        };

        self.phase = next;

        #[cfg(feature = "defmt")]
        if let Some(gesture) = gesture {
            defmt::debug!("switch gesture: {}", gesture);
        }

        gesture
    }

    fn on_held(
        &self,
        pressed: bool,
        now: Instant,
        pressed_at: Instant,
        second: bool,
    ) -> (Phase, Option<Gesture>) {
        // Checked before the level so a release right after the threshold
        // still counts as a long press.
        if let Some(threshold) = self.config.long_press {
            if now.saturating_duration_since(pressed_at) > threshold {
                let released_at = if pressed { None } else { Some(now) };
                return (Phase::Lockout { released_at }, Some(Gesture::LongPress));
            }
        }

        if pressed {
            return (self.phase, None);
        }

        let lockout = Phase::Lockout {
            released_at: Some(now),
        };
        if second {
            (lockout, Some(Gesture::DoubleClick))
        } else if self.config.double_click.is_some() {
            (Phase::AwaitingSecond { released_at: now }, None)
        } else {
            (lockout, Some(Gesture::Click))
        }
    }
}

/// Settling time of the switch pull-ups after power-on (ms).
pub const BOOT_SETTLE_MS: u64 = 100;

/// `true` when the volume switch is held while the device boots.
///
/// Waits for the pull-ups to settle before sampling. The embedding firmware
/// uses this to force Wi-Fi re-provisioning.
pub async fn held_at_boot<P: InputPin>(pin: &mut P) -> Result<bool, ControlError> {
    Timer::after(Duration::from_millis(BOOT_SETTLE_MS)).await;
    let held = platform::held(pin).map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::error!("volume switch unreadable at boot: {}", defmt::Debug2Format(&_e));
        ControlError::Button(Dial::Volume)
    })?;

    #[cfg(feature = "defmt")]
    if held {
        defmt::info!("volume switch held at boot");
    }

    Ok(held)
}
