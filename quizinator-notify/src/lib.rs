//! Best-effort email delivery and the HTML report it carries. Delivery
//! returns a structured outcome instead of raising; callers must not gate
//! task success on it.

mod mailer;
pub mod report;

use async_trait::async_trait;

pub use mailer::{HttpMailNotifier, MailConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Accepted by the transport; carries the provider's message id when one
    /// is returned.
    Delivered(Option<String>),
    /// Transport not configured; nothing was attempted.
    Skipped(String),
    /// Attempted and refused or unreachable.
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered(_))
    }
}

/// Single-recipient delivery. Implementations never return an error and
/// never panic; a broken transport is a `Failed` outcome.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> DeliveryOutcome;
}
