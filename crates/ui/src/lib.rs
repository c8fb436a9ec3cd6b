//! Display-facing types: screen identifiers, the one-way update message,
//! and the mirror state the renderer draws from.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod screen;
pub mod update;
pub mod view;

pub use screen::Screen;
pub use update::{IpLabel, UiUpdate};
pub use view::DisplayModel;
