//! Screen identifiers for every view the display can show.

/// Every top-level view of the appliance display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Station name, origin, bitrate, volume slider and mute glyph.
    #[default]
    Home,
    /// Station roller shown while the station dial is being turned.
    StationSelect,
    /// Station-mode IP address.
    Ip,
    /// "Rebooting" notice before a restart.
    Reboot,
    /// Wi-Fi provisioning instructions.
    Provisioning,
}

#[cfg(test)]
mod tests {
    use super::Screen;

    #[test]
    fn test_screen_defaults_to_home() {
        assert_eq!(Screen::default(), Screen::Home);
    }

    #[test]
    fn test_screen_is_copy() {
        let a = Screen::StationSelect;
        let b = a;
        assert_eq!(a, b);
    }
}
