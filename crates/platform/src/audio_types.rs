//! Audio domain newtypes.
//!
//! - `VolumePercent`: clamps 0–100, the only volume scale the control core
//!   speaks. Register curves are the audio output's business.

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: i64,
    /// The inclusive minimum allowed value.
    pub min: i64,
    /// The inclusive maximum allowed value.
    pub max: i64,
}

impl core::fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "value {} outside {}..={}",
            self.value, self.min, self.max
        )
    }
}

// ── VolumePercent ────────────────────────────────────────────────────────────

/// Volume as a percentage, clamped to 0–100.
///
/// Wraps a `u8` with the invariant `0 <= value <= 100`.
/// Construct with [`VolumePercent::new`] (clamping) or
/// [`VolumePercent::try_from_i32`] (fallible, strict; used for persisted
/// values, which arrive as `i32`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct VolumePercent(u8);

impl VolumePercent {
    /// Silence.
    pub const MIN: Self = Self(0);

    /// Full scale.
    pub const MAX: Self = Self(100);

    /// Create a `VolumePercent`, clamping values above 100 to 100.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > 100 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Create a `VolumePercent` from a signed value, clamping into 0–100.
    #[must_use]
    pub fn saturating_from_i32(value: i32) -> Self {
        // Clamped to 0..=100 first, so the narrowing cannot lose data.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(value.clamp(0, 100) as u8)
    }

    /// Create a `VolumePercent`, returning an error outside 0–100.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `value < 0` or `value > 100`.
    pub fn try_from_i32(value: i32) -> Result<Self, OutOfRangeError> {
        if (0..=100).contains(&value) {
            Ok(Self::saturating_from_i32(value))
        } else {
            Err(OutOfRangeError {
                value: i64::from(value),
                min: 0,
                max: 100,
            })
        }
    }

    /// Return the inner volume value (0–100).
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<VolumePercent> for i32 {
    fn from(volume: VolumePercent) -> Self {
        i32::from(volume.0)
    }
}
