//! Station dial and station switch loops.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Instant, Timer};
use embedded_hal::digital::InputPin;
use platform::{KeyValueStore, NetworkInfo, PulseCounter, Rebooter, StationChanger};
use ui::Screen;

use super::Controls;
use crate::button::{Gesture, GestureClassifier, GestureConfig};
use crate::config::Timing;
use crate::cyclic::CyclicCounter;
use crate::error::{ControlError, Dial};
use crate::settle::{CommitScheduler, Transition};

/// Station dial: pulse counter, cyclic tracker and commit scheduler.
///
/// Detents only move the roller on the selection screen. The stream is
/// switched once the dial has been quiet for the settle timeout.
pub struct StationDial<P, C> {
    counter: P,
    changer: C,
    tracker: CyclicCounter,
    scheduler: CommitScheduler,
}

impl<P: PulseCounter, C: StationChanger> StationDial<P, C> {
    /// Start tracking from the active station, using the counter's current
    /// reading as the reference position.
    pub fn new<M, A, S>(
        mut counter: P,
        changer: C,
        controls: &Controls<'_, M, A, S>,
    ) -> Result<Self, ControlError>
    where
        M: RawMutex,
    {
        let raw = read(&mut counter)?;
        Ok(Self {
            counter,
            changer,
            tracker: CyclicCounter::new(controls.catalog.len(), controls.state.station(), raw),
            scheduler: CommitScheduler::new(&controls.timing),
        })
    }

    /// Highlighted index (pending selection while browsing).
    pub fn index(&self) -> usize {
        self.tracker.index()
    }

    /// Commit scheduler, for the current poll interval.
    pub fn scheduler(&self) -> &CommitScheduler {
        &self.scheduler
    }

    /// Sample the dial at `now` and advance the commit scheduler.
    pub async fn step<M, A, S>(
        &mut self,
        controls: &Controls<'_, M, A, S>,
        now: Instant,
    ) -> Result<Transition, ControlError>
    where
        M: RawMutex,
        S: KeyValueStore,
    {
        // Pick up station changes made elsewhere before the user starts browsing.
        if self.scheduler.is_settled() {
            self.tracker.resync(controls.state.station());
        }

        let raw = read(&mut self.counter)?;
        let (index, changed) = self.tracker.poll(raw);
        let transition = self.scheduler.observe(changed, now);

        match transition {
            Transition::Entered => {
                #[cfg(feature = "defmt")]
                defmt::info!("station dial turned, selection screen");
                controls.notifier.notify_screen(Screen::StationSelect);
                controls.notifier.notify_station_roller(index);
            }
            Transition::Refreshed => {
                #[cfg(feature = "defmt")]
                defmt::debug!("station roller {}", index);
                controls.notifier.notify_station_roller(index);
            }
            Transition::Settled => self.commit(controls, index).await,
            Transition::Idle => {}
        }
        Ok(transition)
    }

    async fn commit<M, A, S>(&mut self, controls: &Controls<'_, M, A, S>, index: usize)
    where
        M: RawMutex,
        S: KeyValueStore,
    {
        if index != controls.state.station() {
            controls.state.set_station(index);
            controls.persistence.persist_station(index).await;
            if let Some(station) = controls.catalog.get(index) {
                #[cfg(feature = "defmt")]
                defmt::info!("station {}: {}, {}", index, station.call_sign, station.origin);
                controls.notifier.notify_station_name(station.call_sign);
                controls.notifier.notify_station_origin(station.origin);
            }
        }

        self.changer.commit_station(index).await;
        controls.notifier.notify_screen(Screen::Home);
    }

    /// Poll forever: fast while browsing, slow while settled.
    pub async fn run<M, A, S>(
        mut self,
        controls: Controls<'_, M, A, S>,
    ) -> Result<Infallible, ControlError>
    where
        M: RawMutex,
        S: KeyValueStore,
    {
        loop {
            self.step(&controls, Instant::now()).await?;
            Timer::after(self.scheduler.poll_interval()).await;
        }
    }
}

fn read<P: PulseCounter>(counter: &mut P) -> Result<i32, ControlError> {
    counter.read_count().map_err(|_e| {
        #[cfg(feature = "defmt")]
        defmt::error!("station counter read failed: {}", defmt::Debug2Format(&_e));
        ControlError::PulseCounter(Dial::Station)
    })
}

/// Station push switch: click shows the IP address, long press reboots.
pub struct StationSwitch<P, N, B> {
    pin: P,
    network: N,
    rebooter: B,
    classifier: GestureClassifier,
}

impl<P: InputPin, N: NetworkInfo, B: Rebooter> StationSwitch<P, N, B> {
    /// Switch on `pin`.
    pub fn new(pin: P, network: N, rebooter: B, timing: &Timing) -> Self {
        Self::with_config(pin, network, rebooter, GestureConfig::station_switch(timing))
    }

    /// As [`StationSwitch::new`] with a custom gesture configuration.
    pub fn with_config(pin: P, network: N, rebooter: B, config: GestureConfig) -> Self {
        Self {
            pin,
            network,
            rebooter,
            classifier: GestureClassifier::new(config),
        }
    }

    /// `true` when no gesture is in progress.
    pub fn is_idle(&self) -> bool {
        self.classifier.is_idle()
    }

    /// Sample the switch at `now` and act on a completed gesture.
    ///
    /// A click holds the IP screen for [`Timing::ip_screen`] before
    /// returning; a long press waits [`Timing::reboot_notice`] and then
    /// requests a reboot.
    pub async fn step<M, A, S>(
        &mut self,
        controls: &Controls<'_, M, A, S>,
        now: Instant,
    ) -> Result<Option<Gesture>, ControlError>
    where
        M: RawMutex,
    {
        let pressed = platform::held(&mut self.pin).map_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::error!("station switch read failed: {}", defmt::Debug2Format(&_e));
            ControlError::Button(Dial::Station)
        })?;

        let gesture = self.classifier.update(pressed, now);
        match gesture {
            Some(Gesture::Click) => {
                controls.notifier.notify_screen(Screen::Ip);
                controls.notifier.notify_ip(self.network.ipv4());
                Timer::after(controls.timing.ip_screen).await;
                controls.notifier.notify_screen(Screen::Home);
            }
            Some(Gesture::LongPress) => {
                #[cfg(feature = "defmt")]
                defmt::info!("long press: rebooting");
                controls.notifier.notify_screen(Screen::Reboot);
                Timer::after(controls.timing.reboot_notice).await;
                self.rebooter.request_reboot();
            }
            // Not enabled on this switch.
            Some(Gesture::DoubleClick) | None => {}
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
    {
        loop {
            self.step(&controls, Instant::now()).await?;
            let period = if self.is_idle() {
                controls.timing.station_switch_poll
            } else {
                controls.timing.gesture_sample
            };
            Timer::after(period).await;
        }
    }
}
