//! Single-threaded task scheduling.
//!
//! Everything in Folio runs on one UI thread. Work that must not block an
//! event handler (content fetches, deferred deep links, staggered fade-ins)
//! is handed to a [`Scheduler`] as a `!Send` local future.

use futures::future::LocalBoxFuture;
use std::time::Duration;

/// A boxed local future with no output.
pub type LocalTask = LocalBoxFuture<'static, ()>;

/// Spawns local tasks and produces timers on the current thread.
pub trait Scheduler {
    /// Runs `task` to completion in the background.
    fn spawn(&self, task: LocalTask);

    /// A future resolving after `duration`.
    fn sleep(&self, duration: Duration) -> LocalTask;
}

/// Scheduler backed by tokio's `spawn_local`.
///
/// Must be used from within a [`tokio::task::LocalSet`].
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(not(target_arch = "wasm32"))]
impl Scheduler for TokioScheduler {
    fn spawn(&self, task: LocalTask) {
        tokio::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalTask {
        Box::pin(tokio::time::sleep(duration))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_tokio_scheduler_runs_local_tasks() {
        let local = tokio::task::LocalSet::new();
        let flag = Rc::new(Cell::new(false));

        local
            .run_until({
                let flag = Rc::clone(&flag);
                async move {
                    let scheduler = TokioScheduler;
                    let sleep = scheduler.sleep(Duration::from_millis(1));
                    scheduler.spawn(Box::pin(async move {
                        sleep.await;
                        flag.set(true);
                    }));
                    tokio::time::sleep(Duration::from_millis(20)).await;
                }
            })
            .await;

        assert!(flag.get());
    }
}
