//! Device registry: the ownership home of every registered device.
//!
//! Identities are minted under the same write guard that inserts the device,
//! so a device is never resolvable before its registration has completed and
//! two concurrent registrations can never share an identity. Resolution only
//! takes the read guard and may run concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use homehub_domain::device::DeviceState;
use homehub_domain::error::{HubError, UnknownDeviceError};
use homehub_domain::id::DeviceId;

use crate::ports::Device;

/// Maps identities to the devices they were issued for.
pub struct DeviceRegistry<D> {
    devices: RwLock<HashMap<DeviceId, Arc<D>>>,
}

impl<D> Default for DeviceRegistry<D> {
    fn default() -> Self {
        Self {
            devices: RwLock::new(HashMap::new()),
        }
    }
}

impl<D: Device> DeviceRegistry<D> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `device` and return its fresh identity.
    #[tracing::instrument(skip_all, fields(kind = %device.kind()))]
    pub async fn register(&self, device: D) -> DeviceId {
        let mut devices = self.devices.write().await;
        let id = loop {
            let candidate = DeviceId::generate();
            if !devices.contains_key(&candidate) {
                break candidate;
            }
        };
        devices.insert(id, Arc::new(device));
        tracing::info!(%id, "device registered");
        id
    }

    /// Resolve an identity to its device handle.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownDeviceError`] if `id` was never issued by this
    /// registry.
    pub async fn resolve(&self, id: DeviceId) -> Result<Arc<D>, UnknownDeviceError> {
        self.devices
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| UnknownDeviceError::new(id))
    }

    /// Snapshot of a registered device's state.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::UnknownDevice`] if `id` was never issued by this
    /// registry.
    pub async fn state(&self, id: DeviceId) -> Result<DeviceState, HubError> {
        Ok(self.resolve(id).await?.state())
    }

    /// Number of registered devices.
    pub async fn len(&self) -> usize {
        self.devices.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.devices.read().await.is_empty()
    }
}
