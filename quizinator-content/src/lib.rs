//! Structured educational content from raw document text, via one
//! chat-completion call per request. Generation never fails hard: parse and
//! invocation errors degrade into placeholder payloads of the right shape.

mod chat;
mod generator;
mod prompts;

pub use chat::{ChatModel, ModelError, OpenAiChatModel};
pub use generator::ContentGenerator;
