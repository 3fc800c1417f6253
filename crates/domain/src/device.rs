//! Device: the capability model shared by every device variant.
//!
//! Each variant owns a small state machine (see the submodules) with a single
//! entry point that applies a [`CommandKind`] and reports an [`Ack`] or a
//! [`DeviceError`](crate::error::DeviceError). The transition rules live here,
//! free of IO, so adapters only add latency and synchronisation around them.

mod light;
mod speaker;
mod toilet;

pub use light::LightState;
pub use speaker::SpeakerState;
pub use toilet::ToiletState;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::CommandKind;
use crate::error::DeviceError;

/// Device variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Light,
    Speaker,
    Toilet,
}

impl DeviceKind {
    /// Build the [`DeviceError::UnsupportedCommand`] for this variant.
    #[must_use]
    pub fn unsupported(self, command: CommandKind) -> DeviceError {
        DeviceError::UnsupportedCommand {
            device: self,
            command,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Speaker => f.write_str("speaker"),
            Self::Toilet => f.write_str("toilet"),
        }
    }
}

/// Power state shared by switchable devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    #[default]
    Off,
    On,
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::On => f.write_str("on"),
        }
    }
}

/// Successful result of applying a command to a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub device: DeviceKind,
    pub command: CommandKind,
    /// `false` when the command was an idempotent no-op.
    pub changed: bool,
}

impl Ack {
    #[must_use]
    pub fn new(device: DeviceKind, command: CommandKind, changed: bool) -> Self {
        Self {
            device,
            command,
            changed,
        }
    }
}

/// Read-only snapshot of a device's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "device", rename_all = "lowercase")]
pub enum DeviceState {
    Light(LightState),
    Speaker(SpeakerState),
    Toilet { state: ToiletState },
}

impl DeviceState {
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Speaker(_) => DeviceKind::Speaker,
            Self::Toilet { .. } => DeviceKind::Toilet,
        }
    }
}

impl From<LightState> for DeviceState {
    fn from(state: LightState) -> Self {
        Self::Light(state)
    }
}

impl From<SpeakerState> for DeviceState {
    fn from(state: SpeakerState) -> Self {
        Self::Speaker(state)
    }
}

impl From<ToiletState> for DeviceState {
    fn from(state: ToiletState) -> Self {
        Self::Toilet { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_power_to_off() {
        assert_eq!(Power::default(), Power::Off);
    }

    #[test]
    fn should_report_kind_of_snapshot() {
        assert_eq!(
            DeviceState::from(LightState::default()).kind(),
            DeviceKind::Light
        );
        assert_eq!(
            DeviceState::from(SpeakerState::default()).kind(),
            DeviceKind::Speaker
        );
        assert_eq!(
            DeviceState::from(ToiletState::default()).kind(),
            DeviceKind::Toilet
        );
    }

    #[test]
    fn should_serialize_snapshot_with_device_tag() {
        let json = serde_json::to_value(DeviceState::from(ToiletState::Flushing)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"device": "toilet", "state": "flushing"})
        );
    }

    #[test]
    fn should_build_unsupported_error_for_variant() {
        let err = DeviceKind::Light.unsupported(CommandKind::Flush);
        assert_eq!(err.to_string(), "light does not support FLUSH");
    }
}
