//! Collaborator abstractions for the radio control core
//!
//! The control core never touches registers. Everything it reads or drives
//! sits behind one of the traits in this crate, so the same task loops run on
//! the appliance and on the host test harness.
//!
//! # Architecture Layers
//!
//! ```text
//! Embedding firmware (peripheral drivers, audio pipeline, Wi-Fi)
//!         ↓
//! controls (gesture classifiers, dial trackers, settle scheduler)
//!         ↓
//! platform (this crate - trait abstractions)
//! ```
//!
//! # Collaborators
//!
//! - [`PulseCounter`] - quadrature pulse count per dial (read / clear)
//! - [`embedded_hal::digital::InputPin`] - dial push switches (active-low)
//! - [`AudioOutput`] - volume and mute of the output stage
//! - [`KeyValueStore`] - independently committed settings
//! - [`StationChanger`] - tears down and rebuilds the stream for a station
//! - [`RemoteControl`] - IR commands to the attached amplifier
//! - [`Rebooter`] - device restart
//! - [`NetworkInfo`] - station-mode IPv4 address
//!
//! # Features
//!
//! - `std`: host mocks in [`mocks`]
//! - `defmt`: `defmt::Format` derives on all platform types

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
#![allow(clippy::must_use_candidate)] // accessors, callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // Embassy no_std: single-threaded, Send bounds not needed

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod audio;
pub mod audio_types;
pub mod input;
pub mod network;
pub mod power;
pub mod remote;
pub mod station;
pub mod storage;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main collaborator traits
pub use audio::AudioOutput;
pub use audio_types::{OutOfRangeError, VolumePercent};
pub use input::{held, PulseCounter};
pub use network::NetworkInfo;
pub use power::Rebooter;
pub use remote::{RemoteCommand, RemoteControl};
pub use station::StationChanger;
pub use storage::{KeyValueStore, SettingKey};
