use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use quizinator_models::core::{Activity, ScheduledTask, TaskStatus};
use quizinator_models::errors::SendableError;
use std::sync::Arc;

use crate::interfaces::TaskStore;

#[derive(Default)]
struct StoreState {
    tasks: Vec<ScheduledTask>,
    activities: Vec<Activity>,
    next_task_id: i64,
    next_activity_id: i64,
}

/// Mutex-backed store for tests and single-binary runs. Iteration order is
/// insertion order.
#[derive(Clone, Default)]
pub struct MemoryDb {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryDb {
    async fn create_scheduled_tasks_table(&self) -> Result<(), SendableError> {
        Ok(())
    }

    async fn create_activities_table(&self) -> Result<(), SendableError> {
        Ok(())
    }

    async fn upsert_task(&self, task: &ScheduledTask) -> Result<i64, SendableError> {
        let mut guard = self.state.lock();
        match task.id {
            Some(id) => {
                match guard.tasks.iter().position(|t| t.id == Some(id)) {
                    Some(index) => guard.tasks[index] = task.clone(),
                    None => {
                        guard.next_task_id = guard.next_task_id.max(id);
                        guard.tasks.push(task.clone());
                    }
                }
                Ok(id)
            }
            None => {
                guard.next_task_id += 1;
                let id = guard.next_task_id;
                let mut assigned = task.clone();
                assigned.id = Some(id);
                guard.tasks.push(assigned);
                Ok(id)
            }
        }
    }

    async fn fetch_due_tasks(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScheduledTask>, SendableError> {
        let guard = self.state.lock();
        Ok(guard
            .tasks
            .iter()
            .filter(|task| task.is_due(now))
            .cloned()
            .collect())
    }

    async fn fetch_task(&self, task_id: i64) -> Result<Option<ScheduledTask>, SendableError> {
        let guard = self.state.lock();
        Ok(guard
            .tasks
            .iter()
            .find(|task| task.id == Some(task_id))
            .cloned())
    }

    async fn update_task_status(
        &self,
        task_id: i64,
        status: TaskStatus,
        error: Option<&str>,
    ) -> Result<(), SendableError> {
        let mut guard = self.state.lock();
        let task = guard
            .tasks
            .iter_mut()
            .find(|task| task.id == Some(task_id))
            .ok_or_else(|| format!("no task with id {task_id}"))?;
        task.status = status;
        task.error = error.map(|message| message.to_string());
        task.updated_at = Utc::now();
        Ok(())
    }

    async fn log_activity(&self, activity: &Activity) -> Result<(), SendableError> {
        let mut guard = self.state.lock();
        guard.next_activity_id += 1;
        let mut assigned = activity.clone();
        assigned.id = Some(guard.next_activity_id);
        guard.activities.push(assigned);
        Ok(())
    }

    async fn fetch_activities(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Activity>, SendableError> {
        let guard = self.state.lock();
        Ok(guard
            .activities
            .iter()
            .filter(|activity| activity.created_at >= start && activity.created_at <= end)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pending_task(offset_seconds: i64) -> ScheduledTask {
        let now = Utc::now();
        ScheduledTask {
            id: None,
            user_id: "user-1".to_string(),
            file_path: "/tmp/lecture.pdf".to_string(),
            original_file_name: "lecture.pdf".to_string(),
            task_type: "quiz".to_string(),
            question_count: 5,
            recipient_emails: "a@x.com".to_string(),
            scheduled_date: now + Duration::seconds(offset_seconds),
            status: TaskStatus::Pending,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn due_query_skips_future_and_terminal_tasks() {
        let db = MemoryDb::new();
        let due = db.upsert_task(&pending_task(-30)).await.unwrap();
        let _future = db.upsert_task(&pending_task(3600)).await.unwrap();
        let done = db.upsert_task(&pending_task(-30)).await.unwrap();
        db.update_task_status(done, TaskStatus::Completed, None)
            .await
            .unwrap();

        let tasks = db.fetch_due_tasks(Utc::now()).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, Some(due));
    }

    #[tokio::test]
    async fn status_update_records_error_message() {
        let db = MemoryDb::new();
        let id = db.upsert_task(&pending_task(-30)).await.unwrap();
        db.update_task_status(id, TaskStatus::Failed, Some("boom"))
            .await
            .unwrap();

        let task = db.fetch_task(id).await.unwrap().unwrap();
        assert_eq!(task.status, TaskStatus::Failed);
        assert_eq!(task.error.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn activities_are_assigned_ids_and_range_queried() {
        let db = MemoryDb::new();
        let now = Utc::now();
        db.log_activity(&Activity {
            id: None,
            user_id: "user-1".to_string(),
            title: "Quiz Generated".to_string(),
            description: "Generated quiz from lecture.pdf".to_string(),
            activity_type: "quiz".to_string(),
            created_at: now,
        })
        .await
        .unwrap();

        let found = db
            .fetch_activities(now - Duration::hours(1), now + Duration::hours(1))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(1));
    }
}
