use chrono::{DateTime, Utc};
use quizinator_models::core::{Activity, ScheduledTask, TaskStatus};
use quizinator_models::errors::SendableError;
use sqlx::{sqlite::SqliteRow, Row};

pub fn row_to_scheduled_task(row: &SqliteRow) -> Result<ScheduledTask, SendableError> {
    let scheduled_date = timestamp_to_datetime(row.get::<i64, _>("scheduled_date"))?;
    let created_at = timestamp_to_datetime(row.get::<i64, _>("created_at"))?;
    let updated_at = timestamp_to_datetime(row.get::<i64, _>("updated_at"))?;
    let status: TaskStatus = row.get::<String, _>("status").parse()?;

    Ok(ScheduledTask {
        id: row.get::<Option<i64>, _>("id"),
        user_id: row.get::<String, _>("user_id"),
        file_path: row.get::<String, _>("file_path"),
        original_file_name: row.get::<String, _>("original_file_name"),
        task_type: row.get::<String, _>("task_type"),
        question_count: row.get::<i64, _>("question_count"),
        recipient_emails: row.get::<String, _>("recipient_emails"),
        scheduled_date,
        status,
        error: row.get::<Option<String>, _>("error"),
        created_at,
        updated_at,
    })
}

pub fn row_to_activity(row: &SqliteRow) -> Result<Activity, SendableError> {
    let created_at = timestamp_to_datetime(row.get::<i64, _>("created_at"))?;

    Ok(Activity {
        id: row.get::<Option<i64>, _>("id"),
        user_id: row.get::<String, _>("user_id"),
        title: row.get::<String, _>("title"),
        description: row.get::<String, _>("description"),
        activity_type: row.get::<String, _>("activity_type"),
        created_at,
    })
}

fn timestamp_to_datetime(ts: i64) -> Result<DateTime<Utc>, SendableError> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| format!("timestamp {ts} out of range").into())
}
