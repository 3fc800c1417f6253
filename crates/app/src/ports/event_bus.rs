//! Event bus port: publish/subscribe for command outcomes.

use std::future::Future;

use homehub_domain::event::Event;

/// Publishes domain events to interested subscribers.
///
/// Publishing is best-effort: implementations report their own failures
/// (e.g. through logs) and never fail the command that produced the event.
pub trait EventPublisher: Send + Sync {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = ()> + Send;
}

impl<T: EventPublisher> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = ()> + Send {
        (**self).publish(event)
    }
}
