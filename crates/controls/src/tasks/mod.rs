//! Async task loops for the two dials and their push switches.
//!
//! Each input gets its own long-running loop. The loops share nothing but a
//! [`Controls`] bundle of handles, built once by the embedding firmware:
//!
//! ```text
//! VolumeDial    ─┐                        ┌─► AudioOutput (Mutex)
//! VolumeSwitch  ─┤                        ├─► UiChannel (try_send)
//! StationDial   ─┼─► Controls ────────────┼─► KeyValueStore (Mutex)
//! StationSwitch ─┘   (ControlState)       └─► StationChanger / Remote / Rebooter
//! ```
//!
//! Every loop returns only on a fatal peripheral fault.

use core::convert::Infallible;

use embassy_futures::select::{select4, Either4};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal::digital::InputPin;
use platform::{
    AudioOutput, KeyValueStore, NetworkInfo, PulseCounter, Rebooter, RemoteControl,
    StationChanger, VolumePercent,
};

use crate::catalog::StationCatalog;
use crate::config::Timing;
use crate::error::ControlError;
use crate::notify::Notifier;
use crate::persist::Persistence;
use crate::state::ControlState;

pub mod station;
pub mod volume;

pub use station::{StationDial, StationSwitch};
pub use volume::{VolumeDial, VolumeSwitch};

/// Handles shared by all control tasks.
pub struct Controls<'a, M: RawMutex, A, S> {
    /// Cross-task state.
    pub state: &'a ControlState,
    /// Display updates.
    pub notifier: Notifier<'a, M>,
    /// Output stage, shared by the volume dial and the volume switch.
    pub audio: &'a Mutex<M, A>,
    /// Settings store.
    pub persistence: Persistence<'a, M, S>,
    /// Station list.
    pub catalog: StationCatalog,
    /// Poll and hold durations.
    pub timing: Timing,
}

impl<M: RawMutex, A, S> Clone for Controls<'_, M, A, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, A, S> Copy for Controls<'_, M, A, S> {}

impl<M, A, S> Controls<'_, M, A, S>
where
    M: RawMutex,
    A: AudioOutput,
    S: KeyValueStore,
{
    /// Push the restored settings to the output stage and the display so both
    /// start out consistent with [`ControlState`].
    pub async fn announce(&self) {
        let settings = self.state.snapshot();
        {
            let mut audio = self.audio.lock().await;
            log_audio_fault(audio.set_volume(settings.volume).await);
            log_audio_fault(audio.set_mute(settings.muted).await);
        }
        if let Some(station) = self.catalog.get(settings.station) {
            self.notifier.notify_station_name(station.call_sign);
            self.notifier.notify_station_origin(station.origin);
        }
        self.notifier.notify_volume(settings.volume.get());
        self.notifier.notify_mute(settings.muted);
    }

    /// Apply a new volume: unmute (if muted), set the volume, update the
    /// display, then persist. The output is never unmuted after the new
    /// volume is applied, and the output stage is released before any
    /// store write.
    pub async fn apply_volume(&self, volume: VolumePercent) {
        let mut audio = self.audio.lock().await;
        let unmuted = self.state.unmute();
        if unmuted {
            log_audio_fault(audio.set_mute(false).await);
        }
        self.state.set_volume(volume);
        log_audio_fault(audio.set_volume(volume).await);
        drop(audio);

        if unmuted {
            #[cfg(feature = "defmt")]
            defmt::info!("unmuted by volume change");
            self.notifier.notify_mute(false);
        }
        self.notifier.notify_volume(volume.get());

        if unmuted {
            self.persistence.persist_mute(false).await;
        }
        self.persistence.persist_volume(volume).await;

        #[cfg(feature = "defmt")]
        defmt::debug!("volume {}", volume.get());
    }

    /// Flip mute on the output stage. Returns the new mute state.
    pub async fn toggle_mute(&self) -> bool {
        let mut audio = self.audio.lock().await;
        let muted = self.state.toggle_mute();
        log_audio_fault(audio.set_mute(muted).await);
        drop(audio);

        self.notifier.notify_mute(muted);
        self.persistence.persist_mute(muted).await;

        #[cfg(feature = "defmt")]
        defmt::info!("mute {}", muted);
        muted
    }
}

fn log_audio_fault<E: core::fmt::Debug>(result: Result<(), E>) {
    if let Err(_e) = result {
        #[cfg(feature = "defmt")]
        defmt::warn!("audio output rejected update: {}", defmt::Debug2Format(&_e));
    }
}

/// Run all four control loops until one of them fails.
///
/// Call [`Controls::announce`] first so the display reflects the restored
/// settings before the first detent.
#[allow(clippy::too_many_arguments)]
pub async fn run_controls<M, A, S, VP, VB, R, SP, SB, C, N, B>(
    controls: Controls<'_, M, A, S>,
    volume_dial: VolumeDial<VP>,
    volume_switch: VolumeSwitch<VB, R>,
    station_dial: StationDial<SP, C>,
    station_switch: StationSwitch<SB, N, B>,
) -> ControlError
where
    M: RawMutex,
    A: AudioOutput,
    S: KeyValueStore,
    VP: PulseCounter,
    VB: InputPin,
    R: RemoteControl,
    SP: PulseCounter,
    SB: InputPin,
    C: StationChanger,
    N: NetworkInfo,
    B: Rebooter,
{
    #[cfg(feature = "defmt")]
    defmt::info!("control tasks started");

    let (Either4::First(result)
    | Either4::Second(result)
    | Either4::Third(result)
    | Either4::Fourth(result)) = select4(
        volume_dial.run(controls),
        volume_switch.run(controls),
        station_dial.run(controls),
        station_switch.run(controls),
    )
    .await;

    fatal(result)
}

fn fatal(result: Result<Infallible, ControlError>) -> ControlError {
    match result {
        Ok(never) => match never {},
        Err(error) => {
            #[cfg(feature = "defmt")]
            defmt::error!("control task stopped: {}", error);
            error
        }
    }
}
