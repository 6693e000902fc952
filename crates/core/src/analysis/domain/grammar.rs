use crate::lexicon::grammar_rules::{GRAMMAR_ERROR_RULES, GRAMMAR_PATTERNS};
use crate::shared::band::to_band;
use crate::shared::constants::{BAND_BASE, BAND_FLOOR};

use super::feedback::{Mistake, MistakeKind};
use super::transcript::TranscriptStats;

const ERROR_PENALTY: f64 = 0.5;

/// Grammatical Range & Accuracy outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct GrammarAssessment {
    pub score: f64,
    /// Distinct structure labels, in pattern-table order.
    pub structures: Vec<String>,
    /// One entry per error rule that fired.
    pub errors: Vec<Mistake>,
}

/// Runs the pattern and error tables against the original-case transcript.
pub fn assess_grammar(stats: &TranscriptStats) -> GrammarAssessment {
    let transcript = stats.transcript.as_str();

    let structures: Vec<String> = GRAMMAR_PATTERNS
        .iter()
        .filter(|p| p.is_match(transcript))
        .map(|p| p.label.to_string())
        .collect();

    let errors: Vec<Mistake> = GRAMMAR_ERROR_RULES
        .iter()
        .filter_map(|rule| {
            rule.find(transcript).map(|text| {
                Mistake::new(
                    text,
                    format!("{}. Try '{}'.", rule.issue, rule.fix),
                    MistakeKind::Grammar,
                )
            })
        })
        .collect();

    let score = if stats.is_empty() {
        BAND_FLOOR
    } else {
        let range_bonus = match structures.len() {
            n if n >= 6 => 3.0,
            n if n >= 4 => 2.0,
            n if n >= 2 => 1.0,
            _ => 0.0,
        };
        to_band(BAND_BASE + range_bonus - ERROR_PENALTY * errors.len() as f64)
    };

    GrammarAssessment {
        score,
        structures,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::transcript::AnalysisInput;
    use approx::assert_relative_eq;

    fn assess(transcript: &str) -> GrammarAssessment {
        assess_grammar(&TranscriptStats::from_input(&AnalysisInput::new(
            transcript, 30.0, "Hometown",
        )))
    }

    #[test]
    fn test_agreement_error_and_concessive_clause() {
        let a = assess("I is happy because although it was good.");
        assert!(a.structures.contains(&"Concessive Clause".to_string()));
        assert_eq!(a.errors.len(), 1);
        assert_eq!(a.errors[0].text, "I is");
        assert_eq!(a.errors[0].kind, MistakeKind::Grammar);
        assert_eq!(
            a.errors[0].issue,
            "Subject-verb agreement error. Try 'are/am'."
        );
    }

    #[test]
    fn test_look_forward_to_is_not_an_error() {
        let a = assess("I look forward to meeting you tomorrow");
        assert!(a.errors.is_empty());
    }

    #[test]
    fn test_structures_collapse_duplicates_and_keep_table_order() {
        let a = assess("Although it rained, although we were cold, if you come, we go.");
        assert_eq!(a.structures, vec!["Conditional (If/Unless)", "Concessive Clause"]);
        assert_relative_eq!(a.score, 6.0);
    }

    #[test]
    fn test_wide_range_earns_top_bonus() {
        let a = assess(
            "If I had known, the house which was painted would have been sold. \
             Although it is old, I must have loved it. Moreover, never have I seen it.",
        );
        assert!(a.structures.len() >= 6);
        assert!(a.errors.is_empty());
        assert_relative_eq!(a.score, 8.0);
    }

    #[test]
    fn test_each_error_costs_half_a_band() {
        let a = assess("He have much people and they is here");
        assert_eq!(a.errors.len(), 3);
        assert_relative_eq!(a.score, 3.5);
    }

    #[test]
    fn test_empty_transcript_is_floor() {
        let a = assess("");
        assert_relative_eq!(a.score, 3.0);
        assert!(a.structures.is_empty());
        assert!(a.errors.is_empty());
    }
}
