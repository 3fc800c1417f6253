//! Virtual device implementations: light, speaker, toilet.
//!
//! Each device keeps its domain state machine behind a mutex and waits for
//! its configured latency to simulate the round trip to real hardware.

mod light;
mod speaker;
mod toilet;

pub use light::VirtualLight;
pub use speaker::VirtualSpeaker;
pub use toilet::VirtualToilet;

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use homehub_domain::command::CommandKind;
use homehub_domain::device::{Ack, DeviceKind, DeviceState};
use homehub_domain::error::DeviceError;

use homehub_app::ports::Device;

use crate::config::VirtualConfig;

/// Wrapper enum for the concrete virtual device types.
pub enum VirtualDevice {
    Light(VirtualLight),
    Speaker(VirtualSpeaker),
    Toilet(VirtualToilet),
}

impl VirtualDevice {
    /// A light using the timings of `config`.
    #[must_use]
    pub fn light(config: &VirtualConfig) -> Self {
        Self::Light(VirtualLight::new(config.command_latency()))
    }

    /// A speaker using the timings of `config`.
    #[must_use]
    pub fn speaker(config: &VirtualConfig) -> Self {
        Self::Speaker(VirtualSpeaker::new(config.command_latency()))
    }

    /// A toilet using the timings of `config`.
    #[must_use]
    pub fn toilet(config: &VirtualConfig) -> Self {
        Self::Toilet(VirtualToilet::new(
            config.flush_duration(),
            config.clean_duration(),
        ))
    }
}

impl From<VirtualLight> for VirtualDevice {
    fn from(device: VirtualLight) -> Self {
        Self::Light(device)
    }
}

impl From<VirtualSpeaker> for VirtualDevice {
    fn from(device: VirtualSpeaker) -> Self {
        Self::Speaker(device)
    }
}

impl From<VirtualToilet> for VirtualDevice {
    fn from(device: VirtualToilet) -> Self {
        Self::Toilet(device)
    }
}

impl Device for VirtualDevice {
    fn kind(&self) -> DeviceKind {
        match self {
            Self::Light(_) => DeviceKind::Light,
            Self::Speaker(_) => DeviceKind::Speaker,
            Self::Toilet(_) => DeviceKind::Toilet,
        }
    }

    fn state(&self) -> DeviceState {
        match self {
            Self::Light(d) => d.state().into(),
            Self::Speaker(d) => d.state().into(),
            Self::Toilet(d) => d.state().into(),
        }
    }

    async fn apply(&self, command: CommandKind, payload: Option<&str>) -> Result<Ack, DeviceError> {
        match self {
            Self::Light(d) => d.apply(command).await,
            Self::Speaker(d) => d.apply(command, payload).await,
            Self::Toilet(d) => d.apply(command).await,
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn simulate_io(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
