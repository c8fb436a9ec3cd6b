//! Error type for the control core.
//!
//! Only faults that invalidate the whole subsystem are errors. Settings-store
//! and display-queue failures are absorbed where they happen.

/// Which dial a fault belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dial {
    /// Volume dial and its push switch.
    Volume,
    /// Station dial and its push switch.
    Station,
}

impl Dial {
    /// Short name for logs and error text.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Station => "station",
        }
    }
}

/// Fatal control-core errors. The embedding firmware restarts on any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// The dial's pulse counter could not be read.
    PulseCounter(Dial),
    /// The dial's push switch could not be read.
    Button(Dial),
    /// The station catalog has no entries.
    EmptyCatalog,
}

#[cfg(feature = "std")]
impl std::error::Error for ControlError {}

impl core::fmt::Display for ControlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PulseCounter(dial) => write!(f, "{} pulse counter read failed", dial.as_str()),
            Self::Button(dial) => write!(f, "{} switch read failed", dial.as_str()),
            Self::EmptyCatalog => write!(f, "station catalog is empty"),
        }
    }
}
