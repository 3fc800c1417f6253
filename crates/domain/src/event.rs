//! Event: an immutable record of a command outcome.
//!
//! The executor publishes one event per dispatched message so observers can
//! follow device activity without touching device state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::Ack;
use crate::error::DeviceError;
use crate::id::{DeviceId, EventId};
use crate::message::Message;

/// UTC timestamp of an event.
pub type Timestamp = DateTime<Utc>;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    CommandApplied,
    CommandFailed,
}

/// A timestamped record published on the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    pub device_id: Option<DeviceId>,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    #[must_use]
    pub fn new(
        event_type: EventType,
        device_id: Option<DeviceId>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            id: EventId::generate(),
            event_type,
            device_id,
            data,
            timestamp: Utc::now(),
        }
    }

    /// `message` was applied by its target device.
    #[must_use]
    pub fn command_applied(message: &Message, ack: &Ack) -> Self {
        Self::new(
            EventType::CommandApplied,
            Some(message.target()),
            serde_json::json!({
                "command": message.kind(),
                "device": ack.device,
                "changed": ack.changed,
            }),
        )
    }

    /// `message` was rejected by its target device.
    #[must_use]
    pub fn command_failed(message: &Message, error: &DeviceError) -> Self {
        Self::new(
            EventType::CommandFailed,
            Some(message.target()),
            serde_json::json!({
                "command": message.kind(),
                "error": error.kind().to_string(),
                "reason": error.to_string(),
            }),
        )
    }
}
