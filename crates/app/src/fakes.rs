//! In-memory device used by the unit tests of this crate.
//!
//! Runs the domain state machines directly (no busy window for the toilet)
//! and records every accepted command in a shared journal.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use homehub_domain::command::CommandKind;
use homehub_domain::device::{Ack, DeviceKind, DeviceState, LightState, SpeakerState, ToiletState};
use homehub_domain::error::DeviceError;

use crate::ports::Device;

/// Accepted commands, in completion order.
pub type Journal = Arc<Mutex<Vec<(&'static str, CommandKind)>>>;

pub struct FakeDevice {
    name: &'static str,
    state: Mutex<DeviceState>,
    delay: Duration,
    journal: Journal,
}

impl FakeDevice {
    fn new(name: &'static str, state: DeviceState, journal: &Journal) -> Self {
        Self {
            name,
            state: Mutex::new(state),
            delay: Duration::ZERO,
            journal: Arc::clone(journal),
        }
    }

    pub fn light(name: &'static str, journal: &Journal) -> Self {
        Self::new(name, LightState::default().into(), journal)
    }

    pub fn speaker(name: &'static str, journal: &Journal) -> Self {
        Self::new(name, SpeakerState::default().into(), journal)
    }

    pub fn toilet(name: &'static str, journal: &Journal) -> Self {
        Self::new(name, ToiletState::default().into(), journal)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Device for FakeDevice {
    fn kind(&self) -> DeviceKind {
        self.state().kind()
    }

    fn state(&self) -> DeviceState {
        self.state.lock().unwrap().clone()
    }

    async fn apply(&self, command: CommandKind, payload: Option<&str>) -> Result<Ack, DeviceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let result = match &mut *self.state.lock().unwrap() {
            DeviceState::Light(light) => light.apply(command),
            DeviceState::Speaker(speaker) => speaker.apply(command, payload),
            DeviceState::Toilet { state } => state.apply(command),
        };
        if result.is_ok() {
            self.journal.lock().unwrap().push((self.name, command));
        }
        result
    }
}

pub fn journal() -> Journal {
    Journal::default()
}

pub fn entries(journal: &Journal) -> Vec<(&'static str, CommandKind)> {
    journal.lock().unwrap().clone()
}
