//! Remote control of the attached amplifier

/// Commands the IR transmitter can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteCommand {
    /// Toggle amplifier power.
    PowerToggle,
}

/// Fire-and-forget remote command sender.
pub trait RemoteControl {
    /// Transmit `command`. Delivery is not acknowledged.
    fn send_command(&mut self, command: RemoteCommand);
}
