//! Input-and-feedback core of the internet radio.
//!
//! Turns raw dial pulse counts and push-switch levels into user intents
//! (volume change, mute toggle, station selection and commit, reboot,
//! amplifier power) and fans the resulting state out to the audio output,
//! the display queue and the settings store.
//!
//! # Layers
//!
//! ```text
//! tasks         async loops: VolumeDial, VolumeSwitch, StationDial, StationSwitch
//!   │
//!   ├── bounded / cyclic   raw count → volume / station index
//!   ├── button             level samples → Click / DoubleClick / LongPress
//!   ├── settle             Settled ⇄ Browsing, deferred station commit
//!   └── state / notify / persist   shared state, display fan-out, settings
//! ```
//!
//! The pure state machines (`bounded`, `cyclic`, `button`, `settle`) take
//! explicit timestamps and never sleep; only `tasks` touches timers.
//!
//! # Boot sequence
//!
//! 1. [`load_settings`] from the store and build a [`ControlState`].
//! 2. Build the [`Controls`] bundle and call [`Controls::announce`].
//! 3. Run [`run_controls`]; it returns only on a fatal [`ControlError`].
//!
//! # Features
//!
//! - `defmt`: log through defmt and derive `defmt::Format` on public types.
//! - `std`: `std::error::Error` for [`ControlError`].

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::future_not_send)] // single-threaded executor

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod bounded;
pub mod button;
pub mod catalog;
pub mod config;
pub mod cyclic;
pub mod error;
pub mod notify;
pub mod persist;
pub mod settle;
pub mod state;
pub mod tasks;

pub use bounded::BoundedCounter;
pub use button::{held_at_boot, Gesture, GestureClassifier, GestureConfig};
pub use catalog::{Codec, Station, StationCatalog};
pub use config::Timing;
pub use cyclic::CyclicCounter;
pub use error::{ControlError, Dial};
pub use notify::{Notifier, UiChannel};
pub use persist::{load_settings, Persistence};
pub use settle::{CommitScheduler, PollRate, SettleState, Transition};
pub use state::{ControlState, Settings};
pub use tasks::{run_controls, Controls, StationDial, StationSwitch, VolumeDial, VolumeSwitch};
