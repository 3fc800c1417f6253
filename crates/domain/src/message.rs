//! Message: a command addressed to a device identity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::command::CommandKind;
use crate::error::PayloadError;
use crate::id::DeviceId;

/// An immutable command addressed to one device.
///
/// Construction never fails: a malformed message (e.g. `PLAY_SONG` without a
/// track) is only rejected when dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    target: DeviceId,
    kind: CommandKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<String>,
}

impl Message {
    /// A message without payload.
    #[must_use]
    pub fn new(target: DeviceId, kind: CommandKind) -> Self {
        Self {
            target,
            kind,
            payload: None,
        }
    }

    /// A message carrying a payload (e.g. the track name for `PLAY_SONG`).
    #[must_use]
    pub fn with_payload(target: DeviceId, kind: CommandKind, payload: impl Into<String>) -> Self {
        Self {
            target,
            kind,
            payload: Some(payload.into()),
        }
    }

    #[must_use]
    pub fn target(&self) -> DeviceId {
        self.target
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// The payload as the device should see it.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when the kind requires a payload and it is
    /// missing or blank.
    pub fn payload_for_dispatch(&self) -> Result<Option<&str>, PayloadError> {
        self.kind.check_payload(self.payload())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Some(payload) => write!(f, "{}({payload:?}) -> {}", self.kind, self.target),
            None => write!(f, "{} -> {}", self.kind, self.target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_message_without_validating_payload() {
        let target = DeviceId::generate();
        let message = Message::new(target, CommandKind::PlaySong);
        assert_eq!(message.target(), target);
        assert_eq!(message.kind(), CommandKind::PlaySong);
        assert!(message.payload().is_none());
        assert_eq!(
            message.payload_for_dispatch(),
            Err(PayloadError::Missing(CommandKind::PlaySong))
        );
    }

    #[test]
    fn should_drop_payload_at_dispatch_for_switch_commands() {
        let message = Message::with_payload(DeviceId::generate(), CommandKind::SwitchOn, "bright");
        assert_eq!(message.payload(), Some("bright"));
        assert_eq!(message.payload_for_dispatch(), Ok(None));
    }

    #[test]
    fn should_display_kind_payload_and_target() {
        let target = DeviceId::generate();
        let message = Message::with_payload(target, CommandKind::PlaySong, "Intro");
        assert_eq!(message.to_string(), format!("PLAY_SONG(\"Intro\") -> {target}"));
    }

    #[test]
    fn should_deserialize_message_without_payload() {
        let target = DeviceId::generate();
        let json = serde_json::json!({"target": target, "kind": "FLUSH"});
        let message: Message = serde_json::from_value(json).unwrap();
        assert_eq!(message, Message::new(target, CommandKind::Flush));
    }
}
