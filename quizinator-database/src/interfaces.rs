use std::future::Future;

use chrono::{DateTime, Utc};
use quizinator_models::core::{Activity, ScheduledTask, TaskStatus};
use quizinator_models::errors::SendableError;

// NOTE: Ensure anything that implements this trait cannot contain a reference
// otherwise, this is breaking major rules
pub trait TaskStore: Send + Sync + 'static {
    fn create_scheduled_tasks_table(&self) -> impl Future<Output = Result<(), SendableError>> + Send;
    fn create_activities_table(&self) -> impl Future<Output = Result<(), SendableError>> + Send;
    fn upsert_task(&self, task: &ScheduledTask) -> impl Future<Output = Result<i64, SendableError>> + Send;
    /// All tasks with `status == pending` and `scheduled_date <= now`, in
    /// store iteration order.
    fn fetch_due_tasks(&self, now: DateTime<Utc>) -> impl Future<Output = Result<Vec<ScheduledTask>, SendableError>> + Send;
    fn fetch_task(&self, task_id: i64) -> impl Future<Output = Result<Option<ScheduledTask>, SendableError>> + Send;
    /// Terminal write: sets status and error, bumps `updated_at`.
    fn update_task_status(
        &self,
        task_id: i64,
        status: TaskStatus,
        error: Option<&str>,
    ) -> impl Future<Output = Result<(), SendableError>> + Send;
    fn log_activity(&self, activity: &Activity) -> impl Future<Output = Result<(), SendableError>> + Send;
    fn fetch_activities(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Activity>, SendableError>> + Send;
}
