use chrono::{DateTime, Duration, Utc};
use quizinator_models::core::{Activity, ScheduledTask, TaskStatus};
use quizinator_models::errors::SendableError;
use sqlx::{sqlite::SqliteConnectOptions, ConnectOptions, Executor, SqlitePool};

use crate::interfaces::TaskStore;
use crate::mappers::{row_to_activity, row_to_scheduled_task};

pub struct SqliteDb {
    pub pool: SqlitePool,
}

impl SqliteDb {
    pub async fn new(filename: &str) -> Result<Self, SendableError> {
        let mut options = SqliteConnectOptions::new()
            .filename(filename)
            .create_if_missing(true);
        let options_with_logs = options
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Warn, Duration::seconds(1).to_std()?);
        let connection = SqlitePool::connect_with(options_with_logs.clone()).await?;
        Ok(SqliteDb { pool: connection })
    }
}

impl TaskStore for SqliteDb {
    async fn create_scheduled_tasks_table(&self) -> Result<(), SendableError> {
        self.pool
            .execute(
                "CREATE TABLE IF NOT EXISTS scheduled_tasks (
            id INTEGER PRIMARY KEY,
            user_id TEXT NOT NULL,
            file_path TEXT NOT NULL,
            original_file_name TEXT NOT NULL,
            task_type TEXT NOT NULL,
            question_count INTEGER NOT NULL DEFAULT 5,
            recipient_emails TEXT NOT NULL DEFAULT '',
            scheduled_date INTEGER NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            error TEXT,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        )",
            )
            .await?;
        Ok(())
    }

    async fn create_activities_table(&self) -> Result<(), SendableError> {
        self.pool
            .execute(
                "CREATE TABLE IF NOT EXISTS activities (
                id INTEGER PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                activity_type TEXT NOT NULL,
                created_at INTEGER NOT NULL
            )",
            )
            .await?;
        Ok(())
    }

    async fn upsert_task(&self, task: &ScheduledTask) -> Result<i64, SendableError> {
        let result = self.pool.execute(sqlx::query(
            "INSERT INTO scheduled_tasks (id, user_id, file_path, original_file_name, task_type, question_count, recipient_emails, scheduled_date, status, error, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                user_id = excluded.user_id,
                file_path = excluded.file_path,
                original_file_name = excluded.original_file_name,
                task_type = excluded.task_type,
                question_count = excluded.question_count,
                recipient_emails = excluded.recipient_emails,
                scheduled_date = excluded.scheduled_date,
                status = excluded.status,
                error = excluded.error,
                updated_at = excluded.updated_at",
        )
        .bind(task.id)
        .bind(&task.user_id)
        .bind(&task.file_path)
        .bind(&task.original_file_name)
        .bind(&task.task_type)
        .bind(task.question_count)
        .bind(&task.recipient_emails)
        .bind(task.scheduled_date.timestamp())
        .bind(task.status.as_str())
        .bind(&task.error)
        .bind(task.created_at.timestamp())
        .bind(task.updated_at.timestamp()))
        .await?;
        Ok(task.id.unwrap_or_else(|| result.last_insert_rowid()))
    }

    async fn fetch_due_tasks(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScheduledTask>, SendableError> {
        let rows = sqlx::query(
            "SELECT id, user_id, file_path, original_file_name, task_type, question_count, recipient_emails, scheduled_date, status, error, created_at, updated_at
             FROM scheduled_tasks
             WHERE status = 'pending' AND scheduled_date <= ?",
        )
        .bind(now.timestamp())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_scheduled_task).collect()
    }

    async fn fetch_task(&self, task_id: i64) -> Result<Option<ScheduledTask>, SendableError> {
        let row = sqlx::query(
            "SELECT id, user_id, file_path, original_file_name, task_type, question_count, recipient_emails, scheduled_date, status, error, created_at, updated_at
             FROM scheduled_tasks WHERE id = ?",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_scheduled_task).transpose()
    }

    async fn update_task_status(
        &self,
        task_id: i64,
        status: TaskStatus,
        error: Option<&str>,
    ) -> Result<(), SendableError> {
        self.pool
            .execute(
                sqlx::query(
                    "UPDATE scheduled_tasks SET status = ?, error = ?, updated_at = ? WHERE id = ?",
                )
                .bind(status.as_str())
                .bind(error)
                .bind(Utc::now().timestamp())
                .bind(task_id),
            )
            .await?;
        Ok(())
    }

    async fn log_activity(&self, activity: &Activity) -> Result<(), SendableError> {
        self.pool
            .execute(
                sqlx::query(
                    "INSERT INTO activities (user_id, title, description, activity_type, created_at)
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&activity.user_id)
                .bind(&activity.title)
                .bind(&activity.description)
                .bind(&activity.activity_type)
                .bind(activity.created_at.timestamp()),
            )
            .await?;
        Ok(())
    }

    async fn fetch_activities(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Activity>, SendableError> {
        let rows = sqlx::query(
            "SELECT id, user_id, title, description, activity_type, created_at
             FROM activities WHERE created_at >= ? AND created_at <= ?",
        )
        .bind(start.timestamp())
        .bind(end.timestamp())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_activity).collect()
    }
}
