//! One-way display update messages.
//!
//! Producers enqueue these without waiting; the display task applies them to
//! a [`DisplayModel`](crate::DisplayModel). String payloads borrow from the
//! static station catalog except the IP label, which is formatted at runtime.

use core::fmt::Write as _;

use crate::screen::Screen;

/// Fixed-capacity text for a dotted-quad IPv4 address ("255.255.255.255").
pub type IpLabel = heapless::String<16>;

/// A single change for the display to mirror.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiUpdate {
    /// Stream bitrate in kbit/s.
    Bitrate(u32),
    /// Call sign of the active station.
    StationName(&'static str),
    /// Origin (city, country) of the active station.
    StationOrigin(&'static str),
    /// Volume slider position, 0–100.
    Volume(u8),
    /// Highlighted entry of the station roller.
    StationRoller(usize),
    /// Mute glyph visibility.
    Mute(bool),
    /// Switch to another view.
    Screen(Screen),
    /// Text for the IP screen.
    IpAddress(IpLabel),
}

impl UiUpdate {
    /// IP label for `address`, or `"No Netif"` when the interface is missing.
    pub fn ip_address(address: Option<[u8; 4]>) -> Self {
        Self::IpAddress(address.and_then(dotted_quad).unwrap_or_else(no_netif))
    }
}

fn dotted_quad([a, b, c, d]: [u8; 4]) -> Option<IpLabel> {
    let mut label = IpLabel::new();
    match write!(label, "{a}.{b}.{c}.{d}") {
        Ok(()) => Some(label),
        Err(_) => None,
    }
}

fn no_netif() -> IpLabel {
    let mut label = IpLabel::new();
    match label.push_str("No Netif") {
        Ok(()) => label,
        // Fits in 16 bytes; an overflow leaves the label empty.
        Err(_) => IpLabel::new(),
    }
}
