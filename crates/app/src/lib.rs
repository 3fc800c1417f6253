//! # homehub-app
//!
//! Application layer: the hub itself, plus **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - `Device`: apply a command to one device and report its state
//!   - `EventPublisher`: publish command outcomes
//! - Own every registered device in the `DeviceRegistry`
//! - Deliver message lists through the `ProgramExecutor`
//! - Compose executor runs (or any other fallible future) with the
//!   `sequence` and `parallel` combinators
//! - Provide the named programs (`wake_up`, `sleep`) and the in-process event bus
//!
//! ## Dependency rule
//! Depends on `homehub-domain` only (plus `tokio::sync` and `futures`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod combinators;
pub mod event_bus;
pub mod executor;
pub mod ports;
pub mod programs;
pub mod registry;

#[cfg(test)]
mod fakes;
