//! Common error types used across the workspace.
//!
//! Devices fail with a [`DeviceError`]. The hub wraps it with the offending
//! message's target and command ([`CommandError`]) and surfaces everything as
//! a [`HubError`]. [`HubError::kind`] flattens both layers onto the closed
//! [`ErrorKind`] taxonomy for callers that only care about the category.

use std::fmt;

use crate::command::CommandKind;
use crate::device::{DeviceKind, ToiletState};
use crate::id::DeviceId;

/// Top-level error returned by the registry, the executor and the combinators.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error(transparent)]
    UnknownDevice(#[from] UnknownDeviceError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl HubError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownDevice(_) => ErrorKind::UnknownDevice,
            Self::Command(err) => err.source.kind(),
        }
    }

    /// The device the failing message was addressed to.
    #[must_use]
    pub fn target(&self) -> DeviceId {
        match self {
            Self::UnknownDevice(err) => err.id,
            Self::Command(err) => err.target,
        }
    }

    /// The command of the failing message, when the error came from a
    /// dispatch.
    #[must_use]
    pub fn command(&self) -> Option<CommandKind> {
        match self {
            Self::UnknownDevice(err) => err.command,
            Self::Command(err) => Some(err.command),
        }
    }
}

/// The identity was never issued by this registry.
///
/// `command` is set when the lookup was made to dispatch a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{}device {id} is not registered", command_prefix(.command))]
pub struct UnknownDeviceError {
    pub id: DeviceId,
    pub command: Option<CommandKind>,
}

impl UnknownDeviceError {
    #[must_use]
    pub fn new(id: DeviceId) -> Self {
        Self { id, command: None }
    }

    /// Attach the command of the message that addressed `id`.
    #[must_use]
    pub fn for_command(self, command: CommandKind) -> Self {
        Self {
            command: Some(command),
            ..self
        }
    }
}

fn command_prefix(command: &Option<CommandKind>) -> String {
    command.map(|kind| format!("{kind}: ")).unwrap_or_default()
}

/// A device rejected a command; carries the message context.
#[derive(Debug, thiserror::Error)]
#[error("{command} on device {target} failed")]
pub struct CommandError {
    pub target: DeviceId,
    pub command: CommandKind,
    #[source]
    pub source: DeviceError,
}

/// Failure reported by a device's state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    #[error("{device} does not support {command}")]
    UnsupportedCommand {
        device: DeviceKind,
        command: CommandKind,
    },

    #[error("{device} is not ready: {reason}")]
    NotReady {
        device: DeviceKind,
        reason: &'static str,
    },

    #[error("{device} is busy ({state})")]
    Busy {
        device: DeviceKind,
        state: ToiletState,
    },

    #[error("invalid payload")]
    InvalidPayload(#[from] PayloadError),
}

impl DeviceError {
    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedCommand { .. } => ErrorKind::UnsupportedCommand,
            Self::NotReady { .. } => ErrorKind::DeviceNotReady,
            Self::Busy { .. } => ErrorKind::DeviceBusy,
            Self::InvalidPayload(_) => ErrorKind::InvalidPayload,
        }
    }
}

/// Required payload is missing or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("{0} requires a payload")]
    Missing(CommandKind),

    #[error("{0} requires a non-blank payload")]
    Blank(CommandKind),
}

/// Closed error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownDevice,
    UnsupportedCommand,
    DeviceNotReady,
    DeviceBusy,
    InvalidPayload,
}

impl ErrorKind {
    /// Whether the same command may succeed later without changing it.
    ///
    /// The hub itself never retries.
    #[must_use]
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::DeviceNotReady | Self::DeviceBusy)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownDevice => "unknown_device",
            Self::UnsupportedCommand => "unsupported_command",
            Self::DeviceNotReady => "device_not_ready",
            Self::DeviceBusy => "device_busy",
            Self::InvalidPayload => "invalid_payload",
        })
    }
}
