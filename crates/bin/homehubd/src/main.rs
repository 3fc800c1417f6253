//! # homehubd, the homehub daemon
//!
//! Composition root that wires the virtual household together and runs its
//! programs.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Construct the registry, the event bus and the executor
//! - Register the light, the speaker and the toilet concurrently
//! - Run the wake-up program, then the sleep program
//! - Report the outcome and the elapsed time
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Instant;

use homehub_adapter_virtual::VirtualDevice;
use homehub_app::event_bus::InProcessEventBus;
use homehub_app::executor::ProgramExecutor;
use homehub_app::programs::{self, Household};
use homehub_app::registry::DeviceRegistry;
use homehub_domain::event::EventType;
use tokio::sync::broadcast::error::TryRecvError;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let started = Instant::now();

    // Registry and event bus
    let registry = Arc::new(DeviceRegistry::new());
    let event_bus = Arc::new(InProcessEventBus::new(config.events.capacity));
    let mut events = event_bus.subscribe();

    // Devices
    let (light, speaker, toilet) = tokio::join!(
        registry.register(VirtualDevice::light(&config.devices)),
        registry.register(VirtualDevice::speaker(&config.devices)),
        registry.register(VirtualDevice::toilet(&config.devices)),
    );
    let household = Household {
        light,
        speaker,
        toilet,
    };
    tracing::info!(devices = registry.len().await, "household registered");

    // Programs
    let executor = ProgramExecutor::new(registry, Arc::clone(&event_bus));
    programs::wake_up(&executor, &household, &config.programs.track).await?;
    programs::sleep(&executor, &household).await?;

    let (mut applied, mut failed) = (0_usize, 0_usize);
    loop {
        match events.try_recv() {
            Ok(event) => match event.event_type {
                EventType::CommandApplied => applied += 1,
                EventType::CommandFailed => failed += 1,
            },
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event subscriber lagged");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }

    tracing::info!(
        applied,
        failed,
        elapsed_ms = started.elapsed().as_millis(),
        "programs completed"
    );

    Ok(())
}
