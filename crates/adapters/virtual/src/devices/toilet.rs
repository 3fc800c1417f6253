//! Virtual toilet: `FLUSH` and `CLEAN` cycles with a busy window.

use std::sync::Mutex;
use std::time::Duration;

use homehub_domain::command::CommandKind;
use homehub_domain::device::{Ack, DeviceKind, ToiletState};
use homehub_domain::error::DeviceError;

use super::{lock, simulate_io};

/// A simulated toilet.
///
/// A cycle keeps the toilet [`Flushing`](ToiletState::Flushing) or
/// [`Cleaning`](ToiletState::Cleaning) for its configured duration; any
/// cycle requested meanwhile fails with [`DeviceError::Busy`].
#[derive(Debug, Default)]
pub struct VirtualToilet {
    state: Mutex<ToiletState>,
    flush_duration: Duration,
    clean_duration: Duration,
}

impl VirtualToilet {
    #[must_use]
    pub fn new(flush_duration: Duration, clean_duration: Duration) -> Self {
        Self {
            state: Mutex::default(),
            flush_duration,
            clean_duration,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn state(&self) -> ToiletState {
        *lock(&self.state)
    }

    /// Run a full cycle. Returns once the toilet is idle again.
    ///
    /// # Errors
    ///
    /// See [`ToiletState::begin`].
    pub async fn apply(&self, command: CommandKind) -> Result<Ack, DeviceError> {
        let phase = lock(&self.state).begin(command)?;
        let cycle = Cycle { state: &self.state };

        tracing::debug!(%phase, "toilet cycle started");
        simulate_io(match phase {
            ToiletState::Flushing => self.flush_duration,
            ToiletState::Cleaning => self.clean_duration,
            ToiletState::Idle => Duration::ZERO,
        })
        .await;
        drop(cycle);

        Ok(Ack::new(DeviceKind::Toilet, command, true))
    }
}

/// Returns the toilet to idle when dropped, including when the caller drops
/// the command future mid-cycle.
struct Cycle<'a> {
    state: &'a Mutex<ToiletState>,
}

impl Drop for Cycle<'_> {
    fn drop(&mut self) {
        lock(self.state).finish();
    }
}
