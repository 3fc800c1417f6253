//! # homehub-domain
//!
//! Pure domain model for the homehub command hub.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Commands** (the closed vocabulary: `SWITCH_ON`, `PLAY_SONG`, `FLUSH`, …)
//! - Define **Messages** (a command addressed to a device identity)
//! - Define **Device state machines** (light, speaker, toilet) and their snapshots
//! - Define **Events** (records of applied and rejected commands)
//! - Contain all invariant enforcement and transition rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or async runtimes.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod command;
pub mod device;
pub mod event;
pub mod message;
