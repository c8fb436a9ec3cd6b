//! Static station list.

use crate::error::ControlError;

/// Stream encoding, used by the embedding firmware to pick a decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Codec {
    /// MPEG-1 Layer III
    Mp3,
    /// AAC / HE-AAC
    Aac,
    /// FLAC
    Flac,
    /// Ogg Vorbis
    Ogg,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Station {
    /// Short name shown on the home screen.
    pub call_sign: &'static str,
    /// City and country.
    pub origin: &'static str,
    /// Stream encoding.
    pub codec: Codec,
    /// Stream URL.
    pub uri: &'static str,
}

/// Non-empty, fixed list of stations. Its length is the wrap-around point
/// of the station dial.
#[derive(Debug, Clone, Copy)]
pub struct StationCatalog {
    stations: &'static [Station],
}

impl StationCatalog {
    /// Wrap `stations`.
    ///
    /// # Errors
    ///
    /// [`ControlError::EmptyCatalog`] if `stations` is empty.
    pub const fn new(stations: &'static [Station]) -> Result<Self, ControlError> {
        if stations.is_empty() {
            return Err(ControlError::EmptyCatalog);
        }
        Ok(Self { stations })
    }

    /// Number of stations (at least 1).
    pub const fn len(&self) -> usize {
        self.stations.len()
    }

    /// Always `false`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Station at `index`.
    pub fn get(&self, index: usize) -> Option<&'static Station> {
        self.stations.get(index)
    }

    /// All stations in dial order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Station> {
        self.stations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STATIONS: [Station; 2] = [
        Station {
            call_sign: "KEXP",
            origin: "Seattle, US",
            codec: Codec::Aac,
            uri: "http://kexp.streamguys1.com/kexp64.aac",
        },
        Station {
            call_sign: "FIP",
            origin: "Paris, FR",
            codec: Codec::Mp3,
            uri: "http://icecast.radiofrance.fr/fip-midfi.mp3",
        },
    ];

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            StationCatalog::new(&[]).err(),
            Some(ControlError::EmptyCatalog)
        );
    }

    #[test]
    fn test_lookup_by_index() {
        let catalog = StationCatalog::new(&STATIONS).unwrap_or_else(|_| unreachable!());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|s| s.call_sign), Some("FIP"));
        assert!(catalog.get(2).is_none());
        assert_eq!(catalog.iter().count(), 2);
    }
}
