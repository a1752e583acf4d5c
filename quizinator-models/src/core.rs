use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ExecutionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
    Failed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ExecutionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            "failed" => Ok(TaskStatus::Failed),
            other => Err(ExecutionError::Store(format!(
                "unknown task status '{other}'"
            ))),
        }
    }
}

/// The content shapes a task can request. `Automation` is accepted at the
/// API layer but has no generation branch; the executor rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    QuestionGeneration,
    Quiz,
    FillInBlanks,
    TrueFalse,
    Subjective,
    Automation,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::QuestionGeneration => "question_generation",
            TaskType::Quiz => "quiz",
            TaskType::FillInBlanks => "fill_in_blanks",
            TaskType::TrueFalse => "true_false",
            TaskType::Subjective => "subjective",
            TaskType::Automation => "automation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskType::QuestionGeneration => "Questions",
            TaskType::Quiz => "Quiz",
            TaskType::FillInBlanks => "Fill in the Blanks",
            TaskType::TrueFalse => "True/False",
            TaskType::Subjective => "Subjective Questions",
            TaskType::Automation => "Automation",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = ExecutionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "question_generation" => Ok(TaskType::QuestionGeneration),
            "quiz" => Ok(TaskType::Quiz),
            "fill_in_blanks" => Ok(TaskType::FillInBlanks),
            "true_false" => Ok(TaskType::TrueFalse),
            "subjective" => Ok(TaskType::Subjective),
            "automation" => Ok(TaskType::Automation),
            other => Err(ExecutionError::UnsupportedTaskType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: Option<i64>,
    pub user_id: String,
    pub file_path: String,
    pub original_file_name: String,
    pub task_type: String,
    pub question_count: i64,
    pub recipient_emails: String,
    pub scheduled_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduledTask {
    /// A pending task whose scheduled instant has passed is due.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == TaskStatus::Pending && self.scheduled_date <= now
    }

    pub fn recipients(&self) -> Vec<String> {
        parse_recipients(&self.recipient_emails)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Option<i64>,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub activity_type: String,
    pub created_at: DateTime<Utc>,
}

/// Splits a comma-separated address list, trimming whitespace and dropping
/// empty entries.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task_with_status(status: TaskStatus, offset_seconds: i64) -> ScheduledTask {
        let now = Utc::now();
        ScheduledTask {
            id: Some(1),
            user_id: "user-1".to_string(),
            file_path: "/tmp/notes.txt".to_string(),
            original_file_name: "notes.txt".to_string(),
            task_type: "quiz".to_string(),
            question_count: 5,
            recipient_emails: String::new(),
            scheduled_date: now + Duration::seconds(offset_seconds),
            status,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn recipients_are_trimmed_and_empties_dropped() {
        assert_eq!(
            parse_recipients("a@x.com, , b@x.com ,"),
            vec!["a@x.com".to_string(), "b@x.com".to_string()]
        );
    }

    #[test]
    fn recipients_of_blank_string_is_empty() {
        assert!(parse_recipients("  ").is_empty());
        assert!(parse_recipients("").is_empty());
    }

    #[test]
    fn pending_past_task_is_due() {
        let task = task_with_status(TaskStatus::Pending, -60);
        assert!(task.is_due(Utc::now()));
    }

    #[test]
    fn pending_future_task_is_not_due() {
        let task = task_with_status(TaskStatus::Pending, 60);
        assert!(!task.is_due(Utc::now()));
    }

    #[test]
    fn terminal_tasks_are_never_due() {
        assert!(!task_with_status(TaskStatus::Completed, -60).is_due(Utc::now()));
        assert!(!task_with_status(TaskStatus::Failed, -60).is_due(Utc::now()));
    }

    #[test]
    fn task_type_round_trips_through_strings() {
        for value in [
            "question_generation",
            "quiz",
            "fill_in_blanks",
            "true_false",
            "subjective",
            "automation",
        ] {
            let parsed: TaskType = value.parse().unwrap();
            assert_eq!(parsed.as_str(), value);
        }
        assert!("essay".parse::<TaskType>().is_err());
    }
}
