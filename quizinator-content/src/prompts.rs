//! Prompt construction. Every prompt demands a bare JSON array so the reply
//! can be parsed directly after fence stripping.

/// Upper bound on document text embedded in a prompt, to respect model
/// context limits.
pub const MAX_PROMPT_CHARS: usize = 10_000;

pub fn truncate_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_PROMPT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn questions(text: &str, count: i64) -> String {
    format!(
        "Based on the following text, generate {count} educational questions. \
         Return ONLY a JSON array of question strings, no markdown, no commentary.\n\n\
         Text:\n{}",
        truncate_text(text)
    )
}

pub fn quiz(text: &str, count: i64) -> String {
    format!(
        "Based on the following text, generate {count} multiple-choice quiz questions. \
         Return ONLY a JSON array of objects with keys \"question\", \"options\" \
         (an array of 4 strings) and \"correctAnswer\", no markdown, no commentary.\n\n\
         Text:\n{}",
        truncate_text(text)
    )
}

pub fn fill_in_blanks(text: &str, count: i64) -> String {
    format!(
        "Based on the following text, generate {count} fill-in-the-blank exercises. \
         Use \"_____\" for the blank. Return ONLY a JSON array of objects with keys \
         \"question\" and \"answer\", no markdown, no commentary.\n\n\
         Text:\n{}",
        truncate_text(text)
    )
}

pub fn true_false(text: &str, count: i64) -> String {
    format!(
        "Based on the following text, generate {count} true/false statements. \
         Return ONLY a JSON array of objects with keys \"question\", \"answer\" \
         (a boolean) and \"explanation\", no markdown, no commentary.\n\n\
         Text:\n{}",
        truncate_text(text)
    )
}

pub fn subjective(text: &str, count: i64) -> String {
    format!(
        "Based on the following text, generate {count} subjective questions. \
         Return ONLY a JSON array of objects with keys \"question\", \
         \"suggestedAnswer\" and \"keyPoints\" (an array of strings), \
         no markdown, no commentary.\n\n\
         Text:\n{}",
        truncate_text(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_text_is_truncated_to_the_prompt_bound() {
        let text = "x".repeat(MAX_PROMPT_CHARS + 500);
        assert_eq!(truncate_text(&text).chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(MAX_PROMPT_CHARS + 10);
        let truncated = truncate_text(&text);
        assert_eq!(truncated.chars().count(), MAX_PROMPT_CHARS);
        assert!(text.is_char_boundary(truncated.len()));
    }

    #[test]
    fn prompts_carry_the_requested_count() {
        let prompt = true_false("Some text.", 3);
        assert!(prompt.contains("generate 3 true/false"));
        assert!(prompt.contains("Some text."));
    }
}
