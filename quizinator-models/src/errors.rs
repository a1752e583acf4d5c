use thiserror::Error;

pub type SendableError = Box<dyn std::error::Error + Send + Sync>;

/// Fatal faults of a single task execution. Anything here sends the task to
/// `failed`; generation and delivery degrade instead of raising.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("source file not found: {0}")]
    FileNotFound(String),
    #[error("text extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("document is empty or unreadable: {0}")]
    EmptyOrUnreadable(String),
    #[error("unsupported task type '{0}'")]
    UnsupportedTaskType(String),
    #[error("task store error: {0}")]
    Store(String),
}
