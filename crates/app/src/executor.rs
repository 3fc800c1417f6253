//! Program executor: delivers message lists to registered devices.
//!
//! One [`run`](ProgramExecutor::run) resolves each message's target through
//! the registry and applies the command. The first failure stops the run:
//! later messages are not delivered, earlier ones are not rolled back.
//! Ordering between different runs is left to the caller, who composes them
//! with [`sequence`](crate::combinators::sequence) and
//! [`parallel`](crate::combinators::parallel).

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use homehub_domain::device::Ack;
use homehub_domain::error::{CommandError, DeviceError, HubError};
use homehub_domain::event::Event;
use homehub_domain::id::DeviceId;
use homehub_domain::message::Message;

use crate::combinators::parallel;
use crate::ports::{Device, EventPublisher};
use crate::registry::DeviceRegistry;

/// How one run spreads its messages over devices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Strictly in list order, one message at a time.
    #[default]
    Ordered,
    /// One lane per target device, lanes running concurrently.
    ///
    /// Messages to the same device keep their list order. Once a lane fails,
    /// no lane starts another message; the failure is returned after the
    /// in-flight commands have settled.
    PerDevice,
}

/// Delivers messages to the devices of a shared [`DeviceRegistry`].
pub struct ProgramExecutor<D, P> {
    registry: Arc<DeviceRegistry<D>>,
    publisher: P,
}

impl<D, P: Clone> Clone for ProgramExecutor<D, P> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            publisher: self.publisher.clone(),
        }
    }
}

impl<D, P> ProgramExecutor<D, P>
where
    D: Device,
    P: EventPublisher,
{
    /// Create an executor resolving targets through `registry` and
    /// reporting command outcomes to `publisher`.
    pub fn new(registry: Arc<DeviceRegistry<D>>, publisher: P) -> Self {
        Self {
            registry,
            publisher,
        }
    }

    /// The registry targets are resolved through.
    #[must_use]
    pub fn registry(&self) -> &Arc<DeviceRegistry<D>> {
        &self.registry
    }

    /// Deliver `messages` with the default [`DispatchPolicy::Ordered`].
    ///
    /// # Errors
    ///
    /// Returns the first [`HubError`] raised while resolving a target or
    /// applying a command. Remaining messages are not delivered.
    pub async fn run(&self, messages: Vec<Message>) -> Result<(), HubError> {
        self.run_with(messages, DispatchPolicy::default()).await
    }

    /// Deliver `messages` with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns the first [`HubError`] raised while resolving a target or
    /// applying a command.
    #[tracing::instrument(skip(self, messages), fields(messages = messages.len()))]
    pub async fn run_with(
        &self,
        messages: Vec<Message>,
        policy: DispatchPolicy,
    ) -> Result<(), HubError> {
        match policy {
            DispatchPolicy::Ordered => self.dispatch_in_order(&messages).await,
            DispatchPolicy::PerDevice => self.dispatch_per_device(&messages).await,
        }
    }

    async fn dispatch_in_order(&self, messages: &[Message]) -> Result<(), HubError> {
        for message in messages {
            self.dispatch(message).await?;
        }
        Ok(())
    }

    async fn dispatch_per_device(&self, messages: &[Message]) -> Result<(), HubError> {
        let aborted = &AtomicBool::new(false);
        let lanes = split_by_target(messages).into_iter().map(|lane| async move {
            for message in lane {
                if aborted.load(Ordering::Acquire) {
                    break;
                }
                if let Err(err) = self.dispatch(message).await {
                    aborted.store(true, Ordering::Release);
                    return Err(err);
                }
            }
            Ok(())
        });
        parallel(lanes).await
    }

    async fn dispatch(&self, message: &Message) -> Result<Ack, HubError> {
        let device = self
            .registry
            .resolve(message.target())
            .await
            .map_err(|err| err.for_command(message.kind()))
            .inspect_err(|err| tracing::warn!(error = %err, "unknown device"))?;

        let outcome = match message.payload_for_dispatch() {
            Ok(payload) => {
                if payload.is_none() && message.payload().is_some() {
                    tracing::debug!(command = %message.kind(), "payload ignored");
                }
                device.apply(message.kind(), payload).await
            }
            Err(err) => Err(DeviceError::from(err)),
        };

        match outcome {
            Ok(ack) => {
                tracing::debug!(
                    target_id = %message.target(),
                    device = %ack.device,
                    command = %message.kind(),
                    changed = ack.changed,
                    "command applied"
                );
                self.publisher
                    .publish(Event::command_applied(message, &ack))
                    .await;
                Ok(ack)
            }
            Err(source) => {
                tracing::warn!(
                    target_id = %message.target(),
                    command = %message.kind(),
                    error = %source,
                    "command failed"
                );
                self.publisher
                    .publish(Event::command_failed(message, &source))
                    .await;
                Err(CommandError {
                    target: message.target(),
                    command: message.kind(),
                    source,
                }
                .into())
            }
        }
    }
}

/// Group messages by target, keeping list order inside each group and the
/// order of first appearance between groups.
fn split_by_target(messages: &[Message]) -> Vec<Vec<&Message>> {
    let mut lanes: Vec<(DeviceId, Vec<&Message>)> = Vec::new();
    for message in messages {
        match lanes.iter_mut().find(|(target, _)| *target == message.target()) {
            Some((_, lane)) => lane.push(message),
            None => lanes.push((message.target(), vec![message])),
        }
    }
    lanes.into_iter().map(|(_, lane)| lane).collect()
}
