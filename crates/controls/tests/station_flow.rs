//! Station dial settle logic and station switch actions.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing
)]
//!
//! Run with: cargo test -p controls --test station_flow

mod common;

use common::{at, Rig, STATIONS};
use controls::{ControlError, Dial, Gesture, Settings, StationDial, StationSwitch, Transition};
use platform::mocks::{
    MockNetwork, MockPulseCounter, MockRebooter, MockSwitch, RecordingStationChanger, StoredValue,
};
use platform::{SettingKey, VolumePercent};
use ui::{Screen, UiUpdate};

fn on_station(station: usize) -> Settings {
    Settings {
        volume: VolumePercent::new(60),
        muted: false,
        station,
    }
}

#[tokio::test]
async fn test_spin_then_settle_commits_once() {
    let rig = Rig::new(on_station(0));
    let controls = rig.controls();
    let pulses = MockPulseCounter::new();
    let changer = RecordingStationChanger::new();
    let mut dial = StationDial::new(pulses.clone(), changer.clone(), &controls).unwrap();

    assert_eq!(dial.step(&controls, at(0)).await, Ok(Transition::Idle));

    pulses.turn(1);
    assert_eq!(dial.step(&controls, at(200)).await, Ok(Transition::Entered));
    assert_eq!(dial.scheduler().poll_interval(), rig.timing.station_fast_poll);
    pulses.turn(1);
    assert_eq!(dial.step(&controls, at(220)).await, Ok(Transition::Refreshed));
    pulses.turn(1);
    assert_eq!(dial.step(&controls, at(240)).await, Ok(Transition::Refreshed));

    // Quiet polls up to the timeout keep browsing.
    for t in (260..=2240).step_by(20) {
        assert_eq!(dial.step(&controls, at(t)).await, Ok(Transition::Idle));
    }
    assert!(changer.commits().is_empty());
    assert_eq!(rig.state.station(), 0);

    assert_eq!(dial.step(&controls, at(2260)).await, Ok(Transition::Settled));
    assert_eq!(changer.commits(), vec![3]);
    assert_eq!(rig.state.station(), 3);
    assert_eq!(
        rig.store_log.value(SettingKey::StationIndex),
        Some(StoredValue::I32(3))
    );
    assert_eq!(
        rig.drain(),
        vec![
            UiUpdate::Screen(Screen::StationSelect),
            UiUpdate::StationRoller(1),
            UiUpdate::StationRoller(2),
            UiUpdate::StationRoller(3),
            UiUpdate::StationName(STATIONS[3].call_sign),
            UiUpdate::StationOrigin(STATIONS[3].origin),
            UiUpdate::Screen(Screen::Home),
        ]
    );
    assert_eq!(dial.scheduler().poll_interval(), rig.timing.station_slow_poll);

    // Nothing further once settled.
    assert_eq!(dial.step(&controls, at(5000)).await, Ok(Transition::Idle));
    assert_eq!(changer.commits(), vec![3]);
}

#[tokio::test]
async fn test_wraps_backwards_past_first_station() {
    let rig = Rig::new(on_station(0));
    let controls = rig.controls();
    let pulses = MockPulseCounter::new();
    let changer = RecordingStationChanger::new();
    let mut dial = StationDial::new(pulses.clone(), changer.clone(), &controls).unwrap();

    pulses.turn(-2);
    dial.step(&controls, at(0)).await.unwrap();
    assert_eq!(dial.index(), STATIONS.len() - 2);
    dial.step(&controls, at(2100)).await.unwrap();
    assert_eq!(changer.commits(), vec![3]);
}

#[tokio::test]
async fn test_return_to_same_station_still_commits_without_persisting() {
    let rig = Rig::new(on_station(2));
    let controls = rig.controls();
    let pulses = MockPulseCounter::new();
    let changer = RecordingStationChanger::new();
    let mut dial = StationDial::new(pulses.clone(), changer.clone(), &controls).unwrap();

    pulses.turn(1);
    dial.step(&controls, at(0)).await.unwrap();
    pulses.turn(-1);
    dial.step(&controls, at(20)).await.unwrap();
    assert_eq!(dial.step(&controls, at(2100)).await, Ok(Transition::Settled));

    assert_eq!(changer.commits(), vec![2]);
    assert!(rig.store_log.writes().is_empty());
    assert_eq!(
        rig.drain(),
        vec![
            UiUpdate::Screen(Screen::StationSelect),
            UiUpdate::StationRoller(3),
            UiUpdate::StationRoller(2),
            UiUpdate::Screen(Screen::Home),
        ]
    );
}

#[tokio::test]
async fn test_external_station_change_resyncs_dial() {
    let rig = Rig::new(on_station(0));
    let controls = rig.controls();
    let pulses = MockPulseCounter::new();
    pulses.set(400);
    let changer = RecordingStationChanger::new();
    let mut dial = StationDial::new(pulses.clone(), changer.clone(), &controls).unwrap();

    rig.state.set_station(4);
    dial.step(&controls, at(0)).await.unwrap();
    assert_eq!(dial.index(), 4);

    pulses.turn(1);
    dial.step(&controls, at(200)).await.unwrap();
    assert_eq!(dial.index(), 0);
}

#[tokio::test]
async fn test_counter_fault_is_fatal() {
    let rig = Rig::new(on_station(0));
    let controls = rig.controls();
    let pulses = MockPulseCounter::new();
    let mut dial =
        StationDial::new(pulses.clone(), RecordingStationChanger::new(), &controls).unwrap();

    pulses.fail();
    assert_eq!(
        dial.step(&controls, at(0)).await,
        Err(ControlError::PulseCounter(Dial::Station))
    );
}

type Switch = StationSwitch<MockSwitch, MockNetwork, MockRebooter>;

async fn hold(switch: &mut Switch, rig: &Rig, from: u64, to: u64) -> Vec<Gesture> {
    let controls = rig.controls();
    let mut gestures = Vec::new();
    for t in (from..=to).step_by(10) {
        if let Some(g) = switch.step(&controls, at(t)).await.unwrap() {
            gestures.push(g);
        }
    }
    gestures
}

#[tokio::test]
async fn test_short_press_shows_ip_then_home() {
    let rig = Rig::new(on_station(0));
    let pin = MockSwitch::new();
    let network = MockNetwork {
        address: Some([10, 0, 0, 7]),
    };
    let rebooter = MockRebooter::new();
    let mut switch = StationSwitch::new(pin.clone(), network, rebooter.clone(), &rig.timing);

    pin.press();
    hold(&mut switch, &rig, 0, 200).await;
    pin.release();
    let gestures = hold(&mut switch, &rig, 210, 400).await;

    assert_eq!(gestures, vec![Gesture::Click]);
    assert_eq!(
        rig.drain(),
        vec![
            UiUpdate::Screen(Screen::Ip),
            UiUpdate::ip_address(Some([10, 0, 0, 7])),
            UiUpdate::Screen(Screen::Home),
        ]
    );
    assert_eq!(rebooter.requests(), 0);
}

#[tokio::test]
async fn test_short_press_without_network_shows_placeholder() {
    let rig = Rig::new(on_station(0));
    let pin = MockSwitch::new();
    let mut switch = StationSwitch::new(
        pin.clone(),
        MockNetwork::default(),
        MockRebooter::new(),
        &rig.timing,
    );

    pin.press();
    hold(&mut switch, &rig, 0, 100).await;
    pin.release();
    hold(&mut switch, &rig, 110, 200).await;

    let updates = rig.drain();
    let Some(UiUpdate::IpAddress(label)) = updates.get(1) else {
        panic!("expected IP label, got {updates:?}");
    };
    assert_eq!(label.as_str(), "No Netif");
}

#[tokio::test]
async fn test_long_press_requests_reboot_once() {
    let rig = Rig::new(on_station(0));
    let pin = MockSwitch::new();
    let rebooter = MockRebooter::new();
    let mut switch = StationSwitch::new(
        pin.clone(),
        MockNetwork::default(),
        rebooter.clone(),
        &rig.timing,
    );

    pin.press();
    let gestures = hold(&mut switch, &rig, 0, 3000).await;
    pin.release();
    let after_release = hold(&mut switch, &rig, 3010, 3500).await;

    assert_eq!(gestures, vec![Gesture::LongPress]);
    assert!(after_release.is_empty());
    assert_eq!(rebooter.requests(), 1);
    assert_eq!(rig.drain(), vec![UiUpdate::Screen(Screen::Reboot)]);
}
