use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;

use quizinator_models::content::{
    FillInBlankItem, GeneratedContent, QuizItem, SubjectiveItem, TrueFalseItem,
};
use quizinator_models::core::TaskType;

use crate::chat::ChatModel;
use crate::prompts;

/// Fail-soft generator: one model call per request, parsed into the typed
/// payload. The requested count bounds the prompt, not the reply; under- and
/// over-length arrays are returned as-is.
pub struct ContentGenerator {
    model: Arc<dyn ChatModel>,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, task_type: TaskType, text: &str, count: i64) -> GeneratedContent {
        match task_type {
            TaskType::QuestionGeneration => self.questions(text, count).await,
            TaskType::Quiz => self.quiz(text, count).await,
            TaskType::FillInBlanks => self.fill_in_blanks(text, count).await,
            TaskType::TrueFalse => self.true_false(text, count).await,
            TaskType::Subjective => self.subjective(text, count).await,
            // Rejected by the executor before dispatch; degrade rather than
            // panic if it ever lands here.
            TaskType::Automation => fallback_questions("task type 'automation' has no generation branch"),
        }
    }

    async fn questions(&self, text: &str, count: i64) -> GeneratedContent {
        match self.invoke::<Vec<String>>(prompts::questions(text, count)).await {
            Ok(items) => GeneratedContent::Questions(items),
            Err(reason) => fallback_questions(&reason),
        }
    }

    async fn quiz(&self, text: &str, count: i64) -> GeneratedContent {
        match self.invoke::<Vec<QuizItem>>(prompts::quiz(text, count)).await {
            Ok(items) => GeneratedContent::Quiz(items),
            Err(reason) => GeneratedContent::Quiz(vec![QuizItem {
                question: format!("Quiz generation degraded: {reason}"),
                options: vec![
                    "Review the uploaded document".to_string(),
                    "Retry the task later".to_string(),
                    "Check the model configuration".to_string(),
                    "Contact support".to_string(),
                ],
                correct_answer: "Review the uploaded document".to_string(),
            }]),
        }
    }

    async fn fill_in_blanks(&self, text: &str, count: i64) -> GeneratedContent {
        match self
            .invoke::<Vec<FillInBlankItem>>(prompts::fill_in_blanks(text, count))
            .await
        {
            Ok(items) => GeneratedContent::FillInBlanks(items),
            Err(reason) => GeneratedContent::FillInBlanks(vec![FillInBlankItem {
                question: format!("Fill-in-the-blank generation degraded: {reason} _____"),
                answer: "unavailable".to_string(),
            }]),
        }
    }

    async fn true_false(&self, text: &str, count: i64) -> GeneratedContent {
        match self
            .invoke::<Vec<TrueFalseItem>>(prompts::true_false(text, count))
            .await
        {
            Ok(items) => GeneratedContent::TrueFalse(items),
            Err(reason) => GeneratedContent::TrueFalse(vec![TrueFalseItem {
                question: "The document was processed successfully.".to_string(),
                answer: true,
                explanation: format!("True/false generation degraded: {reason}"),
            }]),
        }
    }

    async fn subjective(&self, text: &str, count: i64) -> GeneratedContent {
        match self
            .invoke::<Vec<SubjectiveItem>>(prompts::subjective(text, count))
            .await
        {
            Ok(items) => GeneratedContent::Subjective(items),
            Err(reason) => GeneratedContent::Subjective(vec![SubjectiveItem {
                question: "Summarize the key ideas of the uploaded document.".to_string(),
                suggested_answer: format!("Subjective generation degraded: {reason}"),
                key_points: vec!["Generation degraded; review the document manually".to_string()],
            }]),
        }
    }

    async fn invoke<T: DeserializeOwned>(&self, prompt: String) -> Result<T, String> {
        let raw = match self.model.complete(&prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Model invocation failed: {err}");
                return Err(err.to_string());
            }
        };

        let cleaned = strip_code_fences(&raw);
        serde_json::from_str::<T>(cleaned).map_err(|err| {
            warn!("Model reply was not the requested JSON shape: {err}");
            err.to_string()
        })
    }
}

fn fallback_questions(reason: &str) -> GeneratedContent {
    GeneratedContent::Questions(vec![
        "What are the key concepts discussed in the document?".to_string(),
        "Summarize the main points of the uploaded material.".to_string(),
        format!("Question generation degraded: {reason}"),
    ])
}

/// Models wrap JSON replies in markdown fences often enough that stripping
/// them is part of the parse path.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = match trimmed.strip_prefix("```") {
        Some(rest) => match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest,
        },
        None => trimmed,
    };
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
