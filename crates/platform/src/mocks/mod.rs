//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests.
//!
//! Every mock is a cheap `Clone` sharing its state through `Rc`, so a test
//! keeps one handle to script or inspect the collaborator while the code
//! under test owns the other. Host tests run on a single-threaded executor.

use core::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, InputPin};

use crate::*;

/// Error injected by a mock configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

// ── Pulse counter ────────────────────────────────────────────────────────────

/// Scripted pulse counter.
#[derive(Clone, Default)]
pub struct MockPulseCounter {
    count: Rc<Cell<i32>>,
    failing: Rc<Cell<bool>>,
}

impl MockPulseCounter {
    /// Create a counter reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw count the next read returns
    pub fn set(&self, count: i32) {
        self.count.set(count);
    }

    /// Turn the dial by `detents` clicks of 4 counts each
    pub fn turn(&self, detents: i32) {
        self.count.set(self.count.get().wrapping_add(detents.wrapping_mul(4)));
    }

    /// Make every read fail from now on
    pub fn fail(&self) {
        self.failing.set(true);
    }
}

impl PulseCounter for MockPulseCounter {
    type Error = MockFault;

    fn read_count(&mut self) -> Result<i32, Self::Error> {
        if self.failing.get() {
            return Err(MockFault);
        }
        Ok(self.count.get())
    }

    fn clear_count(&mut self) -> Result<(), Self::Error> {
        self.count.set(0);
        Ok(())
    }
}

// ── Push switch ──────────────────────────────────────────────────────────────

/// Scripted active-low push switch (reads high while released).
#[derive(Clone, Default)]
pub struct MockSwitch {
    pressed: Rc<Cell<bool>>,
}

impl MockSwitch {
    /// Create a released switch
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold the switch down (pin reads low)
    pub fn press(&self) {
        self.pressed.set(true);
    }

    /// Let go of the switch (pin reads high)
    pub fn release(&self) {
        self.pressed.set(false);
    }
}

impl ErrorType for MockSwitch {
    type Error = core::convert::Infallible;
}

impl InputPin for MockSwitch {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.pressed.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pressed.get())
    }
}

// ── Audio output ─────────────────────────────────────────────────────────────

/// One call received by [`MockAudio`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    /// `set_volume`
    Volume(u8),
    /// `set_mute`
    Mute(bool),
}

/// Mock audio output recording every call in order
#[derive(Clone, Default)]
pub struct MockAudio {
    calls: Rc<RefCell<Vec<AudioCall>>>,
}

impl MockAudio {
    /// Create new mock audio output
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls received so far, oldest first
    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    /// Forget recorded calls
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Last volume applied, if any
    pub fn volume(&self) -> Option<u8> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            AudioCall::Volume(v) => Some(*v),
            AudioCall::Mute(_) => None,
        })
    }

    /// Last mute state applied, if any
    pub fn muted(&self) -> Option<bool> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            AudioCall::Mute(m) => Some(*m),
            AudioCall::Volume(_) => None,
        })
    }
}

impl AudioOutput for MockAudio {
    type Error = core::convert::Infallible;

    async fn set_volume(&mut self, volume: VolumePercent) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(AudioCall::Volume(volume.get()));
        Ok(())
    }

    async fn set_mute(&mut self, muted: bool) -> Result<(), Self::Error> {
        self.calls.borrow_mut().push(AudioCall::Mute(muted));
        Ok(())
    }
}

// ── Settings store ───────────────────────────────────────────────────────────

/// A value held by [`MemoryStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredValue {
    /// Written with `set_i32`
    I32(i32),
    /// Written with `set_u8`
    U8(u8),
}

#[derive(Default)]
struct StoreInner {
    values: Vec<(SettingKey, StoredValue)>,
    writes: Vec<(SettingKey, StoredValue)>,
    fail_reads: bool,
    fail_writes: bool,
}

impl StoreInner {
    fn value(&self, key: SettingKey) -> Option<StoredValue> {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    fn put(&mut self, key: SettingKey, value: StoredValue) {
        self.values.retain(|(k, _)| *k != key);
        self.values.push((key, value));
    }
}

/// In-memory settings store with failure injection
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value without recording it as a write
    pub fn preset(&self, key: SettingKey, value: StoredValue) {
        self.inner.borrow_mut().put(key, value);
    }

    /// Current value of `key`
    pub fn value(&self, key: SettingKey) -> Option<StoredValue> {
        self.inner.borrow().value(key)
    }

    /// Successful writes, oldest first
    pub fn writes(&self) -> Vec<(SettingKey, StoredValue)> {
        self.inner.borrow().writes.clone()
    }

    /// Make reads fail (`true`) or succeed (`false`)
    pub fn fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    /// Make writes fail (`true`) or succeed (`false`)
    pub fn fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    fn read(&self, key: SettingKey) -> Result<Option<StoredValue>, MockFault> {
        let inner = self.inner.borrow();
        if inner.fail_reads {
            return Err(MockFault);
        }
        Ok(inner.value(key))
    }

    fn write(&self, key: SettingKey, value: StoredValue) -> Result<(), MockFault> {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_writes {
            return Err(MockFault);
        }
        inner.put(key, value);
        inner.writes.push((key, value));
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    type Error = MockFault;

    fn get_i32(&mut self, key: SettingKey) -> Result<Option<i32>, Self::Error> {
        Ok(match self.read(key)? {
            Some(StoredValue::I32(v)) => Some(v),
            _ => None,
        })
    }

    fn set_i32(&mut self, key: SettingKey, value: i32) -> Result<(), Self::Error> {
        self.write(key, StoredValue::I32(value))
    }

    fn get_u8(&mut self, key: SettingKey) -> Result<Option<u8>, Self::Error> {
        Ok(match self.read(key)? {
            Some(StoredValue::U8(v)) => Some(v),
            _ => None,
        })
    }

    fn set_u8(&mut self, key: SettingKey, value: u8) -> Result<(), Self::Error> {
        self.write(key, StoredValue::U8(value))
    }
}

// ── Station changer ──────────────────────────────────────────────────────────

/// Records every `commit_station` call
#[derive(Clone, Default)]
pub struct RecordingStationChanger {
    commits: Rc<RefCell<Vec<usize>>>,
}

impl RecordingStationChanger {
    /// Create with no recorded commits
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices committed so far, oldest first
    pub fn commits(&self) -> Vec<usize> {
        self.commits.borrow().clone()
    }
}

impl StationChanger for RecordingStationChanger {
    async fn commit_station(&mut self, index: usize) {
        self.commits.borrow_mut().push(index);
    }
}

// ── Remote control ───────────────────────────────────────────────────────────

/// Records every remote command sent
#[derive(Clone, Default)]
pub struct MockRemote {
    sent: Rc<RefCell<Vec<RemoteCommand>>>,
}

impl MockRemote {
    /// Create with no recorded commands
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands sent so far, oldest first
    pub fn sent(&self) -> Vec<RemoteCommand> {
        self.sent.borrow().clone()
    }
}

impl RemoteControl for MockRemote {
    fn send_command(&mut self, command: RemoteCommand) {
        self.sent.borrow_mut().push(command);
    }
}

// ── Rebooter ─────────────────────────────────────────────────────────────────

/// Counts reboot requests instead of restarting
#[derive(Clone, Default)]
pub struct MockRebooter {
    requests: Rc<Cell<u32>>,
}

impl MockRebooter {
    /// Create with zero requests
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reboot requests received
    pub fn requests(&self) -> u32 {
        self.requests.get()
    }
}

impl Rebooter for MockRebooter {
    fn request_reboot(&mut self) {
        self.requests.set(self.requests.get().saturating_add(1));
    }
}

// ── Network ──────────────────────────────────────────────────────────────────

/// Fixed network status
#[derive(Clone, Copy, Default)]
pub struct MockNetwork {
    /// Address reported by [`NetworkInfo::ipv4`]
    pub address: Option<[u8; 4]>,
}

impl NetworkInfo for MockNetwork {
    fn ipv4(&mut self) -> Option<[u8; 4]> {
        self.address
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pulse_counter() {
        let script = MockPulseCounter::new();
        let mut counter = script.clone();

        script.turn(3);
        assert_eq!(counter.read_count().unwrap(), 12);

        script.set(-5);
        assert_eq!(counter.read_count().unwrap(), -5);

        counter.clear_count().unwrap();
        assert_eq!(counter.read_count().unwrap(), 0);

        script.fail();
        assert_eq!(counter.read_count(), Err(MockFault));
    }

    #[test]
    fn test_mock_switch_is_active_low() {
        let script = MockSwitch::new();
        let mut pin = script.clone();
        assert!(!held(&mut pin).unwrap());

        script.press();
        assert!(held(&mut pin).unwrap());
        assert!(!pin.is_high().unwrap());
    }

    #[tokio::test]
    async fn test_mock_audio() {
        let mut audio = MockAudio::new();

        audio.set_mute(true).await.unwrap();
        audio.set_volume(VolumePercent::new(75)).await.unwrap();
        audio.set_mute(false).await.unwrap();

        assert_eq!(
            audio.calls(),
            [AudioCall::Mute(true), AudioCall::Volume(75), AudioCall::Mute(false)]
        );
        assert_eq!(audio.volume(), Some(75));
        assert_eq!(audio.muted(), Some(false));
    }

    #[test]
    fn test_memory_store_typed_reads() {
        let mut store = MemoryStore::new();
        store.set_i32(SettingKey::Volume, 40).unwrap();

        assert_eq!(store.get_i32(SettingKey::Volume).unwrap(), Some(40));
        // Same key, other width: not found.
        assert_eq!(store.get_u8(SettingKey::Volume).unwrap(), None);
        assert_eq!(store.get_i32(SettingKey::StationIndex).unwrap(), None);
    }

    #[test]
    fn test_memory_store_failure_injection() {
        let mut store = MemoryStore::new();
        store.fail_writes(true);
        assert_eq!(store.set_u8(SettingKey::MuteState, 1), Err(MockFault));
        assert!(store.writes().is_empty());

        store.preset(SettingKey::MuteState, StoredValue::U8(1));
        store.fail_reads(true);
        assert_eq!(store.get_u8(SettingKey::MuteState), Err(MockFault));
    }
}
