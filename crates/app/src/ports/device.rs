//! Device port: the capability every registered device provides.

use std::future::Future;

use homehub_domain::command::CommandKind;
use homehub_domain::device::{Ack, DeviceKind, DeviceState};
use homehub_domain::error::DeviceError;

/// A device the hub can deliver commands to.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`). Devices
/// are handed to the [`DeviceRegistry`](crate::registry::DeviceRegistry),
/// which owns them from then on; callers keep only the returned identity.
///
/// The executor never calls [`apply`](Self::apply) concurrently for the same
/// message stream, but independent runs may target the same device at the
/// same time, so implementations must guard their own state.
pub trait Device: Send + Sync {
    /// Which variant this device is.
    fn kind(&self) -> DeviceKind;

    /// Snapshot of the current state.
    fn state(&self) -> DeviceState;

    /// Apply `command`, with the payload already checked for the command
    /// kind (`None` for kinds that take no payload).
    fn apply(
        &self,
        command: CommandKind,
        payload: Option<&str>,
    ) -> impl Future<Output = Result<Ack, DeviceError>> + Send;
}
