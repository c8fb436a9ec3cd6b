//! Deferred station commit.
//!
//! Rebuilding the stream is expensive, so the station dial only switches
//! stations once the user has stopped turning it. [`CommitScheduler`] tracks
//! whether a selection is in progress and how fast the dial should be polled.

use embassy_time::{Duration, Instant};

use crate::config::Timing;

/// Whether the dial has been quiet long enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettleState {
    /// No pending selection; poll slowly.
    Settled,
    /// A selection is pending; poll quickly.
    Browsing {
        /// Time of the most recent detent.
        last_change: Instant,
    },
}

/// Result of one [`CommitScheduler::observe`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// Nothing happened.
    Idle,
    /// First detent of a new selection: show the selection view.
    Entered,
    /// Another detent while browsing.
    Refreshed,
    /// Quiet for the timeout: commit the selection and go home.
    Settled,
}

/// Poll rate requested by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollRate {
    /// Browsing.
    Fast,
    /// Settled.
    Slow,
}

/// Settled/Browsing state machine with an inactivity timeout.
#[derive(Debug, Clone)]
pub struct CommitScheduler {
    state: SettleState,
    timeout: Duration,
    fast: Duration,
    slow: Duration,
}

impl CommitScheduler {
    /// Settled scheduler using the station timings.
    pub fn new(timing: &Timing) -> Self {
        Self {
            state: SettleState::Settled,
            timeout: timing.station_settle,
            fast: timing.station_fast_poll,
            slow: timing.station_slow_poll,
        }
    }

    /// Current state.
    pub fn state(&self) -> SettleState {
        self.state
    }

    /// `true` when no selection is pending.
    pub fn is_settled(&self) -> bool {
        self.state == SettleState::Settled
    }

    /// Requested poll rate.
    pub fn poll_rate(&self) -> PollRate {
        match self.state {
            SettleState::Settled => PollRate::Slow,
            SettleState::Browsing { .. } => PollRate::Fast,
        }
    }

    /// Sleep duration before the next poll.
    pub fn poll_interval(&self) -> Duration {
        match self.poll_rate() {
            PollRate::Fast => self.fast,
            PollRate::Slow => self.slow,
        }
    }

    /// Feed one poll result.
    pub fn observe(&mut self, changed: bool, now: Instant) -> Transition {
        match (self.state, changed) {
            (SettleState::Settled, false) => Transition::Idle,
            (SettleState::Settled, true) => {
                self.state = SettleState::Browsing { last_change: now };
                Transition::Entered
            }
            (SettleState::Browsing { .. }, true) => {
                self.state = SettleState::Browsing { last_change: now };
                Transition::Refreshed
            }
            (SettleState::Browsing { last_change }, false) => {
                if now.saturating_duration_since(last_change) > self.timeout {
                    self.state = SettleState::Settled;
                    Transition::Settled
                } else {
                    Transition::Idle
                }
            }
        }
    }
}
