use std::io::Write;

use thiserror::Error;

use crate::analysis::domain::feedback::FeedbackResult;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// Turns a finished assessment into something a person or program reads.
///
/// Lets the CLI (and any other front end) pick an output format without the
/// analyzer knowing about presentation.
pub trait FeedbackReporter {
    fn render(&self, result: &FeedbackResult) -> Result<String, ReportError>;

    /// Renders `result` and writes it, newline-terminated, to `sink`.
    fn write_to(&self, result: &FeedbackResult, sink: &mut dyn Write) -> Result<(), ReportError> {
        let rendered = self.render(result)?;
        writeln!(sink, "{rendered}")?;
        Ok(())
    }
}

/// Human-readable report: overall band, score cards, examiner notes and
/// flagged issues.
pub struct TextReporter;

impl FeedbackReporter for TextReporter {
    fn render(&self, result: &FeedbackResult) -> Result<String, ReportError> {
        let c = &result.criteria;
        let mut lines = vec![format!("Overall Band: {}", result.overall_band), String::new()];

        let cards = [
            (
                "Fluency & Coherence",
                c.fc.score,
                format!("Speed: {} WPM", c.fc.wpm),
            ),
            (
                "Lexical Resource",
                c.lr.score,
                format!("{} Advanced Words", c.lr.advanced_words_used.len()),
            ),
            (
                "Grammar Range",
                c.gra.score,
                format!("{} Complex Structs", c.gra.complex_structures.len()),
            ),
            ("Pronunciation", c.p.score, "Est. Clarity".to_string()),
        ];
        for (title, score, sub) in cards {
            lines.push(format!("  {title:20} {score:>4.1}  {sub}"));
        }

        lines.push(String::new());
        lines.push("Examiner's Notes:".to_string());
        lines.push(format!("  Vocabulary: {}", c.lr.feedback));
        if !c.lr.advanced_words_used.is_empty() {
            lines.push(format!("    {}", c.lr.advanced_words_used.join(", ")));
        }
        lines.push(format!("  Grammar: {}", c.gra.feedback));
        lines.push(format!("  Fluency: {}", c.fc.feedback));
        lines.push(format!("  Pronunciation: {}", c.p.feedback));

        lines.push(String::new());
        lines.push("Detailed Issues:".to_string());
        if result.mistakes.is_empty() {
            lines.push("  No major algorithmic errors detected. Good job!".to_string());
        }
        for m in &result.mistakes {
            lines.push(format!("  [{}] \"{}\" - {}", m.kind, m.text, m.issue));
        }

        lines.push(String::new());
        lines.push("Transcript:".to_string());
        lines.push(format!("  \"{}\"", result.transcript));

        Ok(lines.join("\n"))
    }
}

/// Pretty-printed JSON of the full result.
pub struct JsonReporter;

impl FeedbackReporter for JsonReporter {
    fn render(&self, result: &FeedbackResult) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
