//! Audio output abstraction

use crate::audio_types::VolumePercent;

/// Output-stage control used by the dial tasks.
///
/// The mapping from the human-facing 0–100 scale to codec registers
/// (linear or logarithmic) belongs to the implementation.
pub trait AudioOutput {
    /// Error type
    type Error: core::fmt::Debug;

    /// Set volume (0-100)
    fn set_volume(
        &mut self,
        volume: VolumePercent,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Silence (`true`) or restore (`false`) the output without touching volume
    fn set_mute(
        &mut self,
        muted: bool,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;
}
