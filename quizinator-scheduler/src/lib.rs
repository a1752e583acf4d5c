pub mod config;
pub mod executor;

use std::sync::Arc;
use std::time;

use chrono::{DateTime, Utc};
use log::{debug, error, info};
use tokio::sync::Notify;

use quizinator_database::interfaces::TaskStore;
use quizinator_models::errors::SendableError;

use crate::config::Config;
use crate::executor::TaskExecutor;

/// One tick: fetch everything due, drive the executor over each task in
/// store order, one at a time. Public so tests can run ticks directly
/// instead of waiting on the timer.
pub async fn run_scheduler_iteration<S: TaskStore>(
    store: &Arc<S>,
    executor: &TaskExecutor<S>,
    now: DateTime<Utc>,
) -> Result<(), SendableError> {
    debug!("Fetching due tasks");
    let tasks = store.fetch_due_tasks(now).await?;
    if tasks.is_empty() {
        debug!("No due tasks");
        return Ok(());
    }

    info!("Running {} due task(s)", tasks.len());
    for task in &tasks {
        let report = executor.execute(task).await;
        debug!(
            "Task {} finished with status {}",
            report.task_id, report.status
        );
    }

    Ok(())
}

async fn schedule_sleep_seconds(config: &Config) {
    tokio::time::sleep(tokio::time::Duration::from_secs(
        config.poll_interval_seconds,
    ))
    .await;
}

/// Process-lifetime loop. A batch drains fully before the next sleep, so a
/// tick never overlaps itself; store faults are logged and the loop keeps
/// going. Stopped via `notify`.
pub async fn scheduler_loop<S: TaskStore>(
    store: Arc<S>,
    executor: TaskExecutor<S>,
    notify: Arc<Notify>,
    config: &Config,
) {
    loop {
        let start = time::Instant::now();
        tokio::select! {
            _ = notify.notified() => {
                info!("Scheduler received shutdown signal.");
                break;
            }
            _ = schedule_sleep_seconds(config) => {
                if let Err(e) = run_scheduler_iteration(&store, &executor, Utc::now()).await {
                    error!("Scheduler iteration failed: {}", e);
                }
            }
        }
        debug!(
            "Scheduler took {} seconds to run",
            start.elapsed().as_secs_f64()
        );
    }
}
