use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info, warn};

use quizinator_content::ContentGenerator;
use quizinator_database::interfaces::TaskStore;
use quizinator_extract::{extract_text, kind_for_path};
use quizinator_models::core::{Activity, ScheduledTask, TaskStatus, TaskType};
use quizinator_models::errors::ExecutionError;
use quizinator_notify::report::{render_report, report_subject};
use quizinator_notify::{DeliveryOutcome, Notifier};

/// Outcome of one execution, for logging and tests. The authoritative
/// result is the status written back to the store.
#[derive(Debug)]
pub struct ExecutionReport {
    pub task_id: i64,
    pub status: TaskStatus,
    pub recipients: usize,
    pub delivered: usize,
}

/// Drives one pending task to a terminal state. Every fault is caught at
/// this boundary; nothing propagates to the scheduler loop.
pub struct TaskExecutor<S: TaskStore> {
    store: Arc<S>,
    generator: ContentGenerator,
    notifier: Arc<dyn Notifier>,
}

impl<S: TaskStore> TaskExecutor<S> {
    pub fn new(store: Arc<S>, generator: ContentGenerator, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            generator,
            notifier,
        }
    }

    pub async fn execute(&self, task: &ScheduledTask) -> ExecutionReport {
        let task_id = task.id.unwrap_or_default();
        debug!("Executing task {} ({})", task_id, task.task_type);

        match self.run_pipeline(task).await {
            Ok((recipients, delivered)) => {
                if let Err(store_err) = self
                    .store
                    .update_task_status(task_id, TaskStatus::Completed, None)
                    .await
                {
                    error!("Could not mark task {} completed: {}", task_id, store_err);
                }
                info!(
                    "Task {} completed; delivered to {}/{} recipient(s)",
                    task_id, delivered, recipients
                );
                ExecutionReport {
                    task_id,
                    status: TaskStatus::Completed,
                    recipients,
                    delivered,
                }
            }
            Err(err) => {
                let message = err.to_string();
                error!("Task {} failed: {}", task_id, message);
                if let Err(store_err) = self
                    .store
                    .update_task_status(task_id, TaskStatus::Failed, Some(&message))
                    .await
                {
                    error!("Could not mark task {} failed: {}", task_id, store_err);
                }
                ExecutionReport {
                    task_id,
                    status: TaskStatus::Failed,
                    recipients: 0,
                    delivered: 0,
                }
            }
        }
    }

    async fn run_pipeline(&self, task: &ScheduledTask) -> Result<(usize, usize), ExecutionError> {
        let path = Path::new(&task.file_path);
        let kind = kind_for_path(path);
        let text = extract_text(path, kind).await?;

        let task_type: TaskType = task.task_type.parse()?;
        if task_type == TaskType::Automation {
            // No generation branch exists for this value; completing the
            // task silently would mask misconfiguration.
            return Err(ExecutionError::UnsupportedTaskType(task.task_type.clone()));
        }

        let content = self
            .generator
            .generate(task_type, &text, task.question_count)
            .await;
        debug!(
            "Generated {} {} item(s) for task {}",
            content.item_count(),
            content.type_name(),
            task.id.unwrap_or_default()
        );

        // Activity is recorded once generation succeeds, independent of
        // whether delivery does.
        let activity = Activity {
            id: None,
            user_id: task.user_id.clone(),
            title: format!("{} Generated", task_type.display_name()),
            description: format!(
                "Generated {} from {}",
                task_type.display_name(),
                task.original_file_name
            ),
            activity_type: task_type.as_str().to_string(),
            created_at: Utc::now(),
        };
        if let Err(store_err) = self.store.log_activity(&activity).await {
            warn!("Could not record activity for task: {}", store_err);
        }

        let recipients = task.recipients();
        let subject = report_subject(task_type, &task.original_file_name);
        let html = render_report(&subject, &content, &task.original_file_name);

        let mut delivered = 0;
        for recipient in &recipients {
            match self.notifier.send(recipient, &subject, &html).await {
                DeliveryOutcome::Delivered(message_id) => {
                    debug!(
                        "Delivered report to {} (id {:?})",
                        recipient, message_id
                    );
                    delivered += 1;
                }
                DeliveryOutcome::Skipped(reason) => {
                    debug!("Skipped delivery to {}: {}", recipient, reason);
                }
                DeliveryOutcome::Failed(reason) => {
                    warn!("Delivery to {} failed: {}", recipient, reason);
                }
            }
        }

        Ok((recipients.len(), delivered))
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
