//! Station switching abstraction

/// Switches the audio stream to another catalog entry.
///
/// Expensive: tears down and rebuilds the streaming pipeline. The control
/// core calls it at most once per settled dial gesture, never per detent.
pub trait StationChanger {
    /// Start streaming the station at `index`.
    ///
    /// Implementations may treat an index equal to the one already playing
    /// as a no-op.
    fn commit_station(&mut self, index: usize) -> impl core::future::Future<Output = ()>;
}
