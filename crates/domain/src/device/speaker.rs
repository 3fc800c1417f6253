//! Speaker: power toggling plus `PLAY_SONG`.
//!
//! Playing never powers the speaker on implicitly, and a new track replaces
//! the current one (there is no queue).

use serde::{Deserialize, Serialize};

use super::{Ack, DeviceKind, Power};
use crate::command::CommandKind;
use crate::error::{DeviceError, PayloadError};

/// State of a speaker. Starts powered off with nothing playing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpeakerState {
    pub power: Power,
    pub track: Option<String>,
}

impl SpeakerState {
    /// Apply a command with its optional payload.
    ///
    /// # Errors
    ///
    /// - [`DeviceError::InvalidPayload`] when `PLAY_SONG` has no usable track name
    /// - [`DeviceError::NotReady`] when `PLAY_SONG` arrives while powered off
    /// - [`DeviceError::UnsupportedCommand`] for `FLUSH` and `CLEAN`
    pub fn apply(
        &mut self,
        command: CommandKind,
        payload: Option<&str>,
    ) -> Result<Ack, DeviceError> {
        let changed = match command {
            CommandKind::SwitchOn => {
                let changed = self.power != Power::On;
                self.power = Power::On;
                changed
            }
            CommandKind::SwitchOff => {
                let changed = self.power != Power::Off || self.track.is_some();
                self.power = Power::Off;
                self.track = None;
                changed
            }
            CommandKind::PlaySong => {
                let Some(track) = command.check_payload(payload)? else {
                    return Err(PayloadError::Missing(command).into());
                };
                if self.power == Power::Off {
                    return Err(DeviceError::NotReady {
                        device: DeviceKind::Speaker,
                        reason: "powered off",
                    });
                }
                let changed = self.track.as_deref() != Some(track);
                self.track = Some(track.to_string());
                changed
            }
            other => return Err(DeviceKind::Speaker.unsupported(other)),
        };
        Ok(Ack::new(DeviceKind::Speaker, command, changed))
    }
}
