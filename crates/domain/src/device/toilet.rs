//! Toilet: `FLUSH` and `CLEAN` cycles.
//!
//! A cycle moves the toilet out of [`ToiletState::Idle`] and back. Adapters
//! that need the busy phase to span a suspension point use
//! [`begin`](ToiletState::begin) and [`finish`](ToiletState::finish);
//! [`apply`](ToiletState::apply) runs a whole cycle at once.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Ack, DeviceKind};
use crate::command::CommandKind;
use crate::error::DeviceError;

/// Phase of a toilet. Starts [`Idle`](Self::Idle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToiletState {
    #[default]
    Idle,
    Flushing,
    Cleaning,
}

impl ToiletState {
    /// Whether a cycle is in progress.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    /// Enter the busy phase for `command` and return it.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::UnsupportedCommand`] for anything but `FLUSH` and `CLEAN`
    /// - [`DeviceError::Busy`] when a cycle is already in progress
    pub fn begin(&mut self, command: CommandKind) -> Result<Self, DeviceError> {
        let phase = match command {
            CommandKind::Flush => Self::Flushing,
            CommandKind::Clean => Self::Cleaning,
            other => return Err(DeviceKind::Toilet.unsupported(other)),
        };
        if self.is_busy() {
            return Err(DeviceError::Busy {
                device: DeviceKind::Toilet,
                state: *self,
            });
        }
        *self = phase;
        Ok(phase)
    }

    /// Leave the busy phase. Returns `false` if the toilet was already idle.
    pub fn finish(&mut self) -> bool {
        let was_busy = self.is_busy();
        *self = Self::Idle;
        was_busy
    }

    /// Run a whole cycle as one step.
    ///
    /// # Errors
    ///
    /// Same as [`begin`](Self::begin).
    pub fn apply(&mut self, command: CommandKind) -> Result<Ack, DeviceError> {
        self.begin(command)?;
        self.finish();
        Ok(Ack::new(DeviceKind::Toilet, command, true))
    }
}

impl fmt::Display for ToiletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Flushing => f.write_str("flushing"),
            Self::Cleaning => f.write_str("cleaning"),
        }
    }
}
