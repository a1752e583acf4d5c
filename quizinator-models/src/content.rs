use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillInBlankItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrueFalseItem {
    pub question: String,
    pub answer: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectiveItem {
    pub question: String,
    pub suggested_answer: String,
    pub key_points: Vec<String>,
}

/// One generated payload per task. Ephemeral: produced by the generator,
/// consumed by the report renderer and the activity log, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum GeneratedContent {
    Questions(Vec<String>),
    Quiz(Vec<QuizItem>),
    FillInBlanks(Vec<FillInBlankItem>),
    TrueFalse(Vec<TrueFalseItem>),
    Subjective(Vec<SubjectiveItem>),
}

impl GeneratedContent {
    pub fn type_name(&self) -> &'static str {
        match self {
            GeneratedContent::Questions(_) => "questions",
            GeneratedContent::Quiz(_) => "quiz",
            GeneratedContent::FillInBlanks(_) => "fill_in_blanks",
            GeneratedContent::TrueFalse(_) => "true_false",
            GeneratedContent::Subjective(_) => "subjective",
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            GeneratedContent::Questions(items) => items.len(),
            GeneratedContent::Quiz(items) => items.len(),
            GeneratedContent::FillInBlanks(items) => items.len(),
            GeneratedContent::TrueFalse(items) => items.len(),
            GeneratedContent::Subjective(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }
}
