//! Virtual light: responds to `SWITCH_ON` / `SWITCH_OFF`.

use std::sync::Mutex;
use std::time::Duration;

use homehub_domain::command::CommandKind;
use homehub_domain::device::{Ack, LightState};
use homehub_domain::error::DeviceError;

use super::{lock, simulate_io};

/// A simulated light that can be switched on and off.
#[derive(Debug, Default)]
pub struct VirtualLight {
    state: Mutex<LightState>,
    latency: Duration,
}

impl VirtualLight {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            state: Mutex::default(),
            latency,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LightState {
        *lock(&self.state)
    }

    /// Apply a command after the simulated latency.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedCommand`] for anything but
    /// `SWITCH_ON` and `SWITCH_OFF`.
    pub async fn apply(&self, command: CommandKind) -> Result<Ack, DeviceError> {
        simulate_io(self.latency).await;
        lock(&self.state).apply(command)
    }
}
