//! Renders a generated payload into a self-contained HTML report, one
//! branch per content type. Empty payloads render a neutral placeholder.

use quizinator_models::content::GeneratedContent;
use quizinator_models::core::TaskType;

pub fn report_subject(task_type: TaskType, file_name: &str) -> String {
    format!("{} from {}", task_type.display_name(), file_name)
}

pub fn render_report(title: &str, content: &GeneratedContent, file_name: &str) -> String {
    let body = if content.is_empty() {
        neutral_placeholder()
    } else {
        match content {
            GeneratedContent::Questions(items) => render_questions(items),
            GeneratedContent::Quiz(items) => render_quiz(items),
            GeneratedContent::FillInBlanks(items) => render_fill_in_blanks(items),
            GeneratedContent::TrueFalse(items) => render_true_false(items),
            GeneratedContent::Subjective(items) => render_subjective(items),
        }
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"></head>\n\
         <body style=\"font-family: Arial, sans-serif; max-width: 640px; margin: 0 auto; color: #222;\">\n\
         <h2 style=\"color: #2c3e50;\">{}</h2>\n\
         <p style=\"color: #777;\">Source document: {}</p>\n\
         {}\n\
         </body>\n</html>\n",
        escape(title),
        escape(file_name),
        body
    )
}

fn neutral_placeholder() -> String {
    "<p>Your document was processed successfully.</p>".to_string()
}

fn render_questions(items: &[String]) -> String {
    let mut out = String::new();
    for (index, question) in items.iter().enumerate() {
        out.push_str(&format!(
            "{}<p><strong>Q{}.</strong> {}</p></div>\n",
            block_open(),
            index + 1,
            escape(question)
        ));
    }
    out
}

fn render_quiz(items: &[quizinator_models::content::QuizItem]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&block_open());
        out.push_str(&format!(
            "<p><strong>Q{}.</strong> {}</p>\n<ul style=\"list-style: none; padding-left: 8px;\">\n",
            index + 1,
            escape(&item.question)
        ));
        for (option_index, option) in item.options.iter().enumerate() {
            out.push_str(&format!(
                "<li>{}. {}</li>\n",
                option_letter(option_index),
                escape(option)
            ));
        }
        out.push_str(&format!(
            "</ul>\n<p style=\"color: #27ae60;\"><em>Answer: {}</em></p></div>\n",
            escape(&item.correct_answer)
        ));
    }
    out
}

fn render_fill_in_blanks(items: &[quizinator_models::content::FillInBlankItem]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{}<p><strong>Q{}.</strong> {}</p>\n\
             <p style=\"color: #27ae60;\"><em>Answer: {}</em></p></div>\n",
            block_open(),
            index + 1,
            escape(&item.question),
            escape(&item.answer)
        ));
    }
    out
}

fn render_true_false(items: &[quizinator_models::content::TrueFalseItem]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        let answer = if item.answer { "True" } else { "False" };
        out.push_str(&format!(
            "{}<p><strong>Q{}.</strong> {}</p>\n\
             <p style=\"color: #27ae60;\"><em>Answer: {}</em></p>\n\
             <p style=\"color: #777;\">{}</p></div>\n",
            block_open(),
            index + 1,
            escape(&item.question),
            answer,
            escape(&item.explanation)
        ));
    }
    out
}

fn render_subjective(items: &[quizinator_models::content::SubjectiveItem]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&block_open());
        out.push_str(&format!(
            "<p><strong>Q{}.</strong> {}</p>\n\
             <p><em>Suggested answer:</em> {}</p>\n",
            index + 1,
            escape(&item.question),
            escape(&item.suggested_answer)
        ));
        if !item.key_points.is_empty() {
            out.push_str("<ul>\n");
            for point in &item.key_points {
                out.push_str(&format!("<li>{}</li>\n", escape(point)));
            }
            out.push_str("</ul>\n");
        }
        out.push_str("</div>\n");
    }
    out
}

fn block_open() -> String {
    "<div style=\"border: 1px solid #e0e0e0; border-radius: 6px; padding: 12px; margin: 10px 0;\">"
        .to_string()
}

fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizinator_models::content::{
        FillInBlankItem, QuizItem, SubjectiveItem, TrueFalseItem,
    };

    #[test]
    fn empty_data_renders_neutral_placeholder_for_every_type() {
        let variants = [
            GeneratedContent::Questions(vec![]),
            GeneratedContent::Quiz(vec![]),
            GeneratedContent::FillInBlanks(vec![]),
            GeneratedContent::TrueFalse(vec![]),
            GeneratedContent::Subjective(vec![]),
        ];
        for content in &variants {
            let html = render_report("Report", content, "notes.txt");
            assert!(
                html.contains("processed successfully"),
                "no placeholder for {}",
                content.type_name()
            );
        }
    }

    #[test]
    fn quiz_options_are_lettered() {
        let content = GeneratedContent::Quiz(vec![QuizItem {
            question: "2+2?".to_string(),
            options: vec!["3".to_string(), "4".to_string(), "5".to_string()],
            correct_answer: "4".to_string(),
        }]);
        let html = render_report("Quiz", &content, "math.txt");
        assert!(html.contains("A. 3"));
        assert!(html.contains("B. 4"));
        assert!(html.contains("C. 5"));
        assert!(html.contains("Answer: 4"));
    }

    #[test]
    fn true_false_blocks_spell_out_the_answer() {
        let content = GeneratedContent::TrueFalse(vec![
            TrueFalseItem {
                question: "Water boils at 100C at sea level.".to_string(),
                answer: true,
                explanation: "Standard pressure.".to_string(),
            },
            TrueFalseItem {
                question: "The sun orbits the earth.".to_string(),
                answer: false,
                explanation: "Heliocentrism.".to_string(),
            },
        ]);
        let html = render_report("True/False", &content, "science.pdf");
        assert!(html.contains("Answer: True"));
        assert!(html.contains("Answer: False"));
    }

    #[test]
    fn fill_in_blanks_and_subjective_render_answers() {
        let blanks = GeneratedContent::FillInBlanks(vec![FillInBlankItem {
            question: "Rust was created at _____.".to_string(),
            answer: "Mozilla".to_string(),
        }]);
        assert!(render_report("Blanks", &blanks, "f.txt").contains("Answer: Mozilla"));

        let subjective = GeneratedContent::Subjective(vec![SubjectiveItem {
            question: "Discuss ownership.".to_string(),
            suggested_answer: "Ownership moves values.".to_string(),
            key_points: vec!["moves".to_string(), "borrows".to_string()],
        }]);
        let html = render_report("Subjective", &subjective, "s.txt");
        assert!(html.contains("Suggested answer:"));
        assert!(html.contains("<li>borrows</li>"));
    }

    #[test]
    fn html_in_content_is_escaped() {
        let content = GeneratedContent::Questions(vec!["<script>alert(1)</script>".to_string()]);
        let html = render_report("Report", &content, "notes.txt");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn subject_names_the_type_and_file() {
        let subject = report_subject(TaskType::Quiz, "lecture.pdf");
        assert!(subject.contains("Quiz"));
        assert!(subject.contains("lecture.pdf"));
    }
}
