//! Port definitions: traits that adapters implement.
//!
//! The registry and the executor are generic over these traits. Adapters
//! implement them and never depend on each other.

pub mod device;
pub mod event_bus;

pub use device::Device;
pub use event_bus::EventPublisher;
