//! Network status queries

/// Read-only view of the station-mode network interface.
pub trait NetworkInfo {
    /// IPv4 address of the station interface, `None` when it does not exist.
    fn ipv4(&mut self) -> Option<[u8; 4]>;
}
