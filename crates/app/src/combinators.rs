//! Composition combinators for fallible asynchronous work.
//!
//! Both combinators accept any iterator of futures resolving to
//! `Result<(), E>`: executor runs, whole programs, or unrelated tasks. Mix
//! different future types by boxing them with
//! [`FutureExt::boxed`](futures::FutureExt::boxed).
//!
//! Futures are lazy, so a task handed to [`sequence`] after a failing one is
//! never polled and none of its side effects happen.

use std::future::Future;

use futures::StreamExt;
use futures::stream::FuturesUnordered;

/// Run `tasks` one after the other, in order.
///
/// Each task runs to completion before the next one starts.
///
/// # Errors
///
/// Returns the first failure. Later tasks are never started.
pub async fn sequence<I, F, E>(tasks: I) -> Result<(), E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<(), E>>,
{
    for (step, task) in tasks.into_iter().enumerate() {
        if let Err(err) = task.await {
            tracing::debug!(step, "sequence stopped at failing step");
            return Err(err);
        }
    }
    Ok(())
}

/// Run `tasks` concurrently and wait for all of them.
///
/// A failing task does not cancel its siblings: every task runs to
/// completion before this returns.
///
/// # Errors
///
/// Returns the first failure in completion order.
pub async fn parallel<I, F, E>(tasks: I) -> Result<(), E>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<(), E>>,
{
    let mut pending: FuturesUnordered<F> = tasks.into_iter().collect();
    let mut first = None;
    let mut failures = 0_usize;

    while let Some(outcome) = pending.next().await {
        if let Err(err) = outcome {
            failures += 1;
            first.get_or_insert(err);
        }
    }

    match first {
        None => Ok(()),
        Some(err) => {
            tracing::debug!(failures, "parallel join completed with failures");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use futures::FutureExt;
    use futures::future::BoxFuture;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Failed(&'static str);

    fn mark(flag: &Arc<AtomicBool>) -> BoxFuture<'static, Result<(), Failed>> {
        let flag = Arc::clone(flag);
        async move {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }
        .boxed()
    }

    fn fail(name: &'static str) -> BoxFuture<'static, Result<(), Failed>> {
        async move { Err(Failed(name)) }.boxed()
    }

    #[tokio::test]
    async fn should_succeed_on_empty_sequence() {
        let tasks: Vec<BoxFuture<'static, Result<(), Failed>>> = Vec::new();
        assert_eq!(sequence(tasks).await, Ok(()));
    }

    #[tokio::test]
    async fn should_short_circuit_sequence_on_first_failure() {
        let ran = Arc::new(AtomicBool::new(false));
        let never = Arc::new(AtomicBool::new(false));

        let result = sequence([mark(&ran), fail("second"), mark(&never)]).await;

        assert_eq!(result, Err(Failed("second")));
        assert!(ran.load(Ordering::SeqCst));
        assert!(!never.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn should_complete_each_sequence_step_before_next() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let step = |index: usize, delay: u64| {
            let order = Arc::clone(&order);
            async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                order.lock().unwrap().push(index);
                Ok::<_, Failed>(())
            }
            .boxed()
        };

        sequence([step(0, 20), step(1, 0), step(2, 5)])
            .await
            .unwrap();

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn should_wait_for_slow_task_when_sibling_fails_fast() {
        let slow_done = Arc::new(AtomicBool::new(false));
        let slow = {
            let slow_done = Arc::clone(&slow_done);
            async move {
                tokio::time::sleep(Duration::from_millis(30)).await;
                slow_done.store(true, Ordering::SeqCst);
                Ok::<_, Failed>(())
            }
            .boxed()
        };

        let result = parallel([fail("fast"), slow]).await;

        assert_eq!(result, Err(Failed("fast")));
        assert!(slow_done.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn should_report_first_failure_in_completion_order() {
        let late = async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            Err::<(), _>(Failed("late"))
        }
        .boxed();
        let early = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            Err::<(), _>(Failed("early"))
        }
        .boxed();

        assert_eq!(parallel([late, early]).await, Err(Failed("early")));
    }

    #[tokio::test]
    async fn should_run_parallel_tasks_concurrently() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let task = || {
            let in_flight = Arc::clone(&in_flight);
            let peak = Arc::clone(&peak);
            async move {
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok::<_, Failed>(())
            }
        };

        parallel([task(), task(), task()]).await.unwrap();

        assert_eq!(peak.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn should_succeed_when_all_parallel_tasks_succeed() {
        let a = Arc::new(AtomicBool::new(false));
        let b = Arc::new(AtomicBool::new(false));

        assert_eq!(parallel([mark(&a), mark(&b)]).await, Ok(()));
        assert!(a.load(Ordering::SeqCst) && b.load(Ordering::SeqCst));
    }
}
