//! Light: `SWITCH_ON` / `SWITCH_OFF`, both idempotent.

use serde::{Deserialize, Serialize};

use super::{Ack, DeviceKind, Power};
use crate::command::CommandKind;
use crate::error::DeviceError;

/// State of a light. Starts [`Power::Off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightState {
    pub power: Power,
}

impl LightState {
    /// Apply a command.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedCommand`] for anything but
    /// `SWITCH_ON` and `SWITCH_OFF`.
    pub fn apply(&mut self, command: CommandKind) -> Result<Ack, DeviceError> {
        let power = match command {
            CommandKind::SwitchOn => Power::On,
            CommandKind::SwitchOff => Power::Off,
            other => return Err(DeviceKind::Light.unsupported(other)),
        };
        let changed = self.power != power;
        self.power = power;
        Ok(Ack::new(DeviceKind::Light, command, changed))
    }
}
