//! Shared fixture for the controls integration tests.
#![allow(dead_code, clippy::expect_used)]

use controls::{
    Codec, ControlState, Controls, Notifier, Persistence, Settings, Station, StationCatalog,
    Timing, UiChannel,
};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Instant};
use platform::mocks::{MemoryStore, MockAudio};
use ui::UiUpdate;

pub static STATIONS: [Station; 5] = [
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
    Station {
        call_sign: "NTS 1",
        origin: "London, UK",
        codec: Codec::Mp3,
        uri: "http://stream-relay-geo.ntslive.net/stream",
    },
    Station {
        call_sign: "Radio Paradise",
        origin: "Paradise, US",
        codec: Codec::Flac,
        uri: "http://stream.radioparadise.com/flac",
    },
    Station {
        call_sign: "SomaFM Groove",
        origin: "San Francisco, US",
        codec: Codec::Ogg,
        uri: "http://ice1.somafm.com/groovesalad-128-ogg",
    },
];

pub fn catalog() -> StationCatalog {
    StationCatalog::new(&STATIONS).expect("catalog is not empty")
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Default timings with every hold shortened so switch actions finish fast.
pub fn quick_timing() -> Timing {
    Timing {
        ip_screen: Duration::from_millis(1),
        reboot_notice: Duration::from_millis(1),
        ..Timing::default()
    }
}

/// Shared state, display queue, audio output and settings store.
pub struct Rig {
    pub state: ControlState,
    pub channel: UiChannel<NoopRawMutex>,
    pub audio: Mutex<NoopRawMutex, MockAudio>,
    pub store: Mutex<NoopRawMutex, MemoryStore>,
    /// Second handle on the audio mock for inspection.
    pub audio_log: MockAudio,
    /// Second handle on the store mock for inspection and fault injection.
    pub store_log: MemoryStore,
    pub timing: Timing,
}

impl Rig {
    pub fn new(settings: Settings) -> Self {
        Self::with_timing(settings, quick_timing())
    }

    pub fn with_timing(settings: Settings, timing: Timing) -> Self {
        let audio_log = MockAudio::new();
        let store_log = MemoryStore::new();
        Self {
            state: ControlState::new(settings),
            channel: UiChannel::new(),
            audio: Mutex::new(audio_log.clone()),
            store: Mutex::new(store_log.clone()),
            audio_log,
            store_log,
            timing,
        }
    }

    pub fn controls(&self) -> Controls<'_, NoopRawMutex, MockAudio, MemoryStore> {
        Controls {
            state: &self.state,
            notifier: Notifier::new(&self.channel),
            audio: &self.audio,
            persistence: Persistence::new(&self.store),
            catalog: catalog(),
            timing: self.timing,
        }
    }

    /// Every queued display update, oldest first.
    pub fn drain(&self) -> Vec<UiUpdate> {
        std::iter::from_fn(|| self.channel.try_receive().ok()).collect()
    }
}
