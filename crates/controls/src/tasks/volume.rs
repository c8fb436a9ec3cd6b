//! Volume dial and volume switch loops.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Instant, Timer};
use embedded_hal::digital::InputPin;
use platform::{
    AudioOutput, KeyValueStore, PulseCounter, RemoteCommand, RemoteControl, VolumePercent,
};

use super::Controls;
use crate::bounded::BoundedCounter;
use crate::button::{Gesture, GestureClassifier, GestureConfig};
use crate::config::Timing;
use crate::error::{ControlError, Dial};

/// Volume dial: pulse counter plus bounded tracker.
pub struct VolumeDial<P> {
    counter: P,
    tracker: BoundedCounter,
}

impl<P: PulseCounter> VolumeDial<P> {
    /// Clear the counter and start tracking from `initial`.
    pub fn new(mut counter: P, initial: VolumePercent) -> Result<Self, ControlError> {
        counter.clear_count().map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::error!("volume counter clear failed: {}", defmt::Debug2Format(&_e));
            ControlError::PulseCounter(Dial::Volume)
        })?;
        Ok(Self {
            counter,
            tracker: BoundedCounter::new(initial),
        })
    }

    /// Current tracked volume.
    pub fn value(&self) -> VolumePercent {
        self.tracker.value()
    }

    /// Sample the dial once and apply any change. Returns the new volume if
    /// it moved.
    pub async fn poll<M, A, S>(
        &mut self,
        controls: &Controls<'_, M, A, S>,
    ) -> Result<Option<VolumePercent>, ControlError>
    where
        M: RawMutex,
        A: AudioOutput,
        S: KeyValueStore,
    {
        let raw = self.counter.read_count().map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::error!("volume counter read failed: {}", defmt::Debug2Format(&_e));
            ControlError::PulseCounter(Dial::Volume)
        })?;

        let (volume, changed) = self.tracker.poll(raw);
        if !changed {
            return Ok(None);
        }
        controls.apply_volume(volume).await;
        Ok(Some(volume))
    }

    /// Poll forever at the volume poll period.
    pub async fn run<M, A, S>(
        mut self,
        controls: Controls<'_, M, A, S>,
    ) -> Result<Infallible, ControlError>
    where
        M: RawMutex,
        A: AudioOutput,
        S: KeyValueStore,
    {
        loop {
            self.poll(&controls).await?;
            Timer::after(controls.timing.volume_poll).await;
        }
    }
}

/// Volume push switch: click toggles mute, double click toggles the
/// amplifier's power through the remote control.
pub struct VolumeSwitch<P, R> {
    pin: P,
    remote: R,
    classifier: GestureClassifier,
}

impl<P: InputPin, R: RemoteControl> VolumeSwitch<P, R> {
    /// Switch on `pin` driving `remote`.
    pub fn new(pin: P, remote: R, timing: &Timing) -> Self {
        Self::with_config(pin, remote, GestureConfig::volume_switch(timing))
    }

    /// As [`VolumeSwitch::new`] with a custom gesture configuration.
    pub fn with_config(pin: P, remote: R, config: GestureConfig) -> Self {
        Self {
            pin,
            remote,
            classifier: GestureClassifier::new(config),
        }
    }

    /// `true` when no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        self.classifier.is_idle()
    }

    /// Sample the switch at `now` and act on a completed gesture.
    pub async fn step<M, A, S>(
        &mut self,
        controls: &Controls<'_, M, A, S>,
        now: Instant,
    ) -> Result<Option<Gesture>, ControlError>
    where
        M: RawMutex,
        A: AudioOutput,
        S: KeyValueStore,
    {
        let pressed = platform::held(&mut self.pin).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::error!("volume switch read failed: {}", defmt::Debug2Format(&_e));
            ControlError::Button(Dial::Volume)
        })?;

        let gesture = self.classifier.update(pressed, now);
        match gesture {
            Some(Gesture::Click) => {
                controls.toggle_mute().await;
            }
            Some(Gesture::DoubleClick) => {
                #[cfg(feature = "defmt")]
                defmt::info!("double click: amplifier power toggle");
                self.remote.send_command(RemoteCommand::PowerToggle);
            }
            // Not enabled on this switch.
            Some(Gesture::LongPress) | None => {}
        }
        Ok(gesture)
    }

    /// Sample forever: slowly while idle, at the gesture sample period
    /// while a press is in progress.
    pub async fn run<M, A, S>(
        mut self,
        controls: Controls<'_, M, A, S>,
    ) -> Result<Infallible, ControlError>
    where
        M: RawMutex,
        A: AudioOutput,
        S: KeyValueStore,
    {
        loop {
            self.step(&controls, Instant::now()).await?;
            let period = if self.is_idle() {
                controls.timing.volume_switch_poll
            } else {
                controls.timing.gesture_sample
            };
            Timer::after(period).await;
        }
    }
}
