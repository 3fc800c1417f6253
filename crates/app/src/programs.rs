//! Named programs: compositions of executor runs.
//!
//! Programs are not stored anywhere: each call builds the message lists,
//! composes the runs with the combinators and evaluates them once.

use homehub_domain::command::CommandKind;
use homehub_domain::error::HubError;
use homehub_domain::id::DeviceId;
use homehub_domain::message::Message;

use crate::combinators::{parallel, sequence};
use crate::executor::{DispatchPolicy, ProgramExecutor};
use crate::ports::{Device, EventPublisher};

/// The devices the household programs drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Household {
    pub light: DeviceId,
    pub speaker: DeviceId,
    pub toilet: DeviceId,
}

/// Switch the light and the speaker on together, then play `track`.
///
/// # Errors
///
/// Returns the first failure; the track is not requested if switching on
/// failed.
#[tracing::instrument(skip(executor, household))]
pub async fn wake_up<D, P>(
    executor: &ProgramExecutor<D, P>,
    household: &Household,
    track: &str,
) -> Result<(), HubError>
where
    D: Device,
    P: EventPublisher,
{
    tracing::info!("wake-up program started");
    sequence([
        executor.run_with(
            vec![
                Message::new(household.light, CommandKind::SwitchOn),
                Message::new(household.speaker, CommandKind::SwitchOn),
            ],
            DispatchPolicy::PerDevice,
        ),
        executor.run_with(
            vec![Message::with_payload(
                household.speaker,
                CommandKind::PlaySong,
                track,
            )],
            DispatchPolicy::Ordered,
        ),
    ])
    .await
}

/// Switch the light and the speaker off while the toilet flushes and then
/// cleans.
///
/// # Errors
///
/// Returns the first failure once both branches have finished.
#[tracing::instrument(skip_all)]
pub async fn sleep<D, P>(
    executor: &ProgramExecutor<D, P>,
    household: &Household,
) -> Result<(), HubError>
where
    D: Device,
    P: EventPublisher,
{
    tracing::info!("sleep program started");
    parallel([
        executor.run_with(
            vec![
                Message::new(household.light, CommandKind::SwitchOff),
                Message::new(household.speaker, CommandKind::SwitchOff),
            ],
            DispatchPolicy::PerDevice,
        ),
        executor.run_with(
            vec![
                Message::new(household.toilet, CommandKind::Flush),
                Message::new(household.toilet, CommandKind::Clean),
            ],
            DispatchPolicy::Ordered,
        ),
    ])
    .await
}
