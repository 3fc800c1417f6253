//! Virtual speaker: power plus `PLAY_SONG`.

use std::sync::Mutex;
use std::time::Duration;

use homehub_domain::command::CommandKind;
use homehub_domain::device::{Ack, SpeakerState};
use homehub_domain::error::DeviceError;

use super::{lock, simulate_io};

/// A simulated speaker playing one track at a time.
#[derive(Debug, Default)]
pub struct VirtualSpeaker {
    state: Mutex<SpeakerState>,
    latency: Duration,
}

impl VirtualSpeaker {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            state: Mutex::default(),
            latency,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SpeakerState {
        lock(&self.state).clone()
    }

    /// Apply a command after the simulated latency.
    ///
    /// # Errors
    ///
    /// See [`SpeakerState::apply`].
    pub async fn apply(
        &self,
        command: CommandKind,
        payload: Option<&str>,
    ) -> Result<Ack, DeviceError> {
        simulate_io(self.latency).await;
        let ack = lock(&self.state).apply(command, payload)?;
        if command == CommandKind::PlaySong {
            tracing::info!(track = payload.unwrap_or_default(), "speaker playing");
        }
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use homehub_domain::device::Power;

    use super::*;

    #[tokio::test]
    async fn should_refuse_to_play_while_off() {
        let speaker = VirtualSpeaker::default();
        let result = speaker.apply(CommandKind::PlaySong, Some("Intro")).await;
        assert!(matches!(result, Err(DeviceError::NotReady { .. })));
        assert_eq!(speaker.state(), SpeakerState::default());
    }

    #[tokio::test]
    async fn should_play_after_switch_on() {
        let speaker = VirtualSpeaker::default();
        speaker.apply(CommandKind::SwitchOn, None).await.unwrap();
        speaker
            .apply(CommandKind::PlaySong, Some("Intro"))
            .await
            .unwrap();

        let state = speaker.state();
        assert_eq!(state.power, Power::On);
        assert_eq!(state.track.as_deref(), Some("Intro"));
    }

    #[tokio::test]
    async fn should_stop_track_when_switched_off() {
        let speaker = VirtualSpeaker::default();
        speaker.apply(CommandKind::SwitchOn, None).await.unwrap();
        speaker
            .apply(CommandKind::PlaySong, Some("Intro"))
            .await
            .unwrap();
        speaker.apply(CommandKind::SwitchOff, None).await.unwrap();

        assert_eq!(speaker.state(), SpeakerState::default());
    }
}
