//! Command kinds: the closed vocabulary a message may carry.
//!
//! New kinds are added together with the device variants that accept them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// Operation requested from a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandKind {
    SwitchOn,
    SwitchOff,
    PlaySong,
    Flush,
    Clean,
}

impl CommandKind {
    /// Whether a message of this kind must carry a payload.
    #[must_use]
    pub fn requires_payload(self) -> bool {
        matches!(self, Self::PlaySong)
    }

    /// Dispatch-time payload check.
    ///
    /// Kinds that require a payload reject a missing or blank one. For every
    /// other kind the payload is ignored and `None` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when a required payload is missing or blank.
    pub fn check_payload(self, payload: Option<&str>) -> Result<Option<&str>, PayloadError> {
        if !self.requires_payload() {
            return Ok(None);
        }
        match payload {
            None => Err(PayloadError::Missing(self)),
            Some(value) if value.trim().is_empty() => Err(PayloadError::Blank(self)),
            Some(value) => Ok(Some(value)),
        }
    }

    /// Wire name, e.g. `"SWITCH_ON"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SwitchOn => "SWITCH_ON",
            Self::SwitchOff => "SWITCH_OFF",
            Self::PlaySong => "PLAY_SONG",
            Self::Flush => "FLUSH",
            Self::Clean => "CLEAN",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
