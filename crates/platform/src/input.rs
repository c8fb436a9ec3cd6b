//! Dial input abstraction
//!
//! Each rotary dial contributes two signals:
//!
//! - a quadrature pulse count maintained by a hardware counter unit
//!   ([`PulseCounter`]), 4 counts per mechanical detent on the reference
//!   hardware;
//! - an active-low push switch, read through [`embedded_hal::digital::InputPin`].

use embedded_hal::digital::InputPin;

/// Quadrature pulse counter for one dial.
///
/// The count is owned by the peripheral: it accumulates both edges of both
/// channels and may be sampled at any time without locking.
pub trait PulseCounter {
    /// Error type
    type Error: core::fmt::Debug;

    /// Read the current signed count.
    fn read_count(&mut self) -> Result<i32, Self::Error>;

    /// Reset the count to zero.
    fn clear_count(&mut self) -> Result<(), Self::Error>;
}

/// Returns `true` while an active-low push switch is held down.
pub fn held<P: InputPin>(pin: &mut P) -> Result<bool, P::Error> {
    pin.is_low()
}
