//! # homehub-adapter-virtual
//!
//! Simulated devices for demonstration and testing. They hold their state
//! in memory and stand in for real hardware by waiting for a configurable
//! latency.
//!
//! ## Provided devices
//!
//! | Device | Commands | Behaviour |
//! |--------|----------|-----------|
//! | [`VirtualLight`] | `SWITCH_ON`, `SWITCH_OFF` | Idempotent power toggle |
//! | [`VirtualSpeaker`] | `SWITCH_ON`, `SWITCH_OFF`, `PLAY_SONG` | Plays one track; must be on to play |
//! | [`VirtualToilet`] | `FLUSH`, `CLEAN` | Busy for the cycle duration, rejects overlapping cycles |
//!
//! [`VirtualDevice`] wraps all three and implements the `Device` port, so a
//! single `DeviceRegistry<VirtualDevice>` can own a whole household.
//!
//! ## Dependency rule
//!
//! Depends on `homehub-app` (port traits) and `homehub-domain` only.

pub mod config;
mod devices;

pub use config::VirtualConfig;
pub use devices::{VirtualDevice, VirtualLight, VirtualSpeaker, VirtualToilet};
