//! Device restart

/// Requests a device restart.
pub trait Rebooter {
    /// Restart the device. On hardware this does not return.
    fn request_reboot(&mut self);
}
