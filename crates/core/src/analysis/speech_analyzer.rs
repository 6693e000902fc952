use std::collections::HashSet;

use crate::analysis::domain::feedback::{
    Criteria, FeedbackResult, FluencyCoherence, GrammarRange, LexicalResource, Mistake,
    MistakeKind, Pronunciation,
};
use crate::analysis::domain::fluency::{assess_fluency, FluencyAssessment};
use crate::analysis::domain::grammar::assess_grammar;
use crate::analysis::domain::lexical::{assess_lexical, LexicalAssessment};
use crate::analysis::domain::pronunciation::assess_pronunciation;
use crate::analysis::domain::transcript::{AnalysisInput, TranscriptStats};
use crate::shared::band::overall_band;
use crate::shared::constants::MAX_MISTAKES;

const HESITATION_RATIO: f64 = 0.08;
const SLOW_PACE_WPM: u32 = 90;

/// Scores a final transcript on the four speaking criteria.
pub fn analyze_speech(transcript: &str, duration_seconds: f64, topic: &str) -> FeedbackResult {
    SpeechAnalyzer::analyze(&AnalysisInput::new(transcript, duration_seconds, topic))
}

pub struct SpeechAnalyzer;

impl SpeechAnalyzer {
    pub fn analyze(input: &AnalysisInput) -> FeedbackResult {
        let stats = TranscriptStats::from_input(input);

        let fluency = assess_fluency(&stats);
        let lexical = assess_lexical(&stats, &input.topic);
        let grammar = assess_grammar(&stats);
        let pronunciation = assess_pronunciation(&stats, fluency.score);

        log::debug!(
            "Scored {} words at {} wpm: fc={} lr={} gra={} p={}",
            stats.word_count(),
            stats.wpm,
            fluency.score,
            lexical.score,
            grammar.score,
            pronunciation
        );

        let overall = overall_band(&[fluency.score, lexical.score, grammar.score, pronunciation]);

        let mut mistakes = Vec::new();
        push_fluency_flags(&mut mistakes, &fluency, stats.wpm);
        push_vocabulary_flags(&mut mistakes, &lexical, &input.topic);
        mistakes.extend(grammar.errors.iter().cloned());
        mistakes.truncate(MAX_MISTAKES);

        let fc = FluencyCoherence {
            score: fluency.score,
            feedback: if stats.wpm > 120 {
                "Excellent natural flow."
            } else {
                "Good, but try to minimize hesitation."
            }
            .to_string(),
            wpm: stats.wpm,
            fillers: fluency.fillers,
        };

        let lr = LexicalResource {
            score: lexical.score,
            feedback: if lexical.topic_count > 0 {
                format!("Great use of \"{}\" vocabulary.", input.topic)
            } else {
                "Vocabulary is generic. Be more specific.".to_string()
            },
            advanced_words_used: lexical.advanced_used,
            topic_words_used: lexical.topic_used,
            repeated_words: lexical.repeated,
        };

        let gra = GrammarRange {
            score: grammar.score,
            feedback: if grammar.structures.len() > 4 {
                "Impressive grammatical variety."
            } else {
                "Try using more complex sentence structures."
            }
            .to_string(),
            complex_structures: grammar.structures,
        };

        let p = Pronunciation {
            score: pronunciation,
            feedback: "Clarity estimated from fluency and flow.".to_string(),
        };

        FeedbackResult {
            overall_band: overall,
            transcript: stats.transcript,
            criteria: Criteria { fc, lr, gra, p },
            mistakes,
        }
    }
}

fn push_fluency_flags(mistakes: &mut Vec<Mistake>, fluency: &FluencyAssessment, wpm: u32) {
    if fluency.filler_ratio > HESITATION_RATIO {
        mistakes.push(Mistake::new(
            "Hesitation",
            "Try to pause silently instead of saying 'um' or 'uh'.",
            MistakeKind::Fluency,
        ));
    }
    if wpm < SLOW_PACE_WPM {
        mistakes.push(Mistake::new(
            "Slow Pace",
            "Try to speak more fluidly. Connect your ideas.",
            MistakeKind::Fluency,
        ));
    }
}

fn push_vocabulary_flags(mistakes: &mut Vec<Mistake>, lexical: &LexicalAssessment, topic: &str) {
    let mut flagged: HashSet<&str> = mistakes.iter().map(|m| m.text.as_str()).collect();
    let mut basic = Vec::new();
    for word in &lexical.basic_used {
        if flagged.insert(word.as_str()) {
            basic.push(Mistake::new(
                word.as_str(),
                "Basic word. Try a more precise synonym.",
                MistakeKind::Vocab,
            ));
        }
    }
    mistakes.extend(basic);

    if lexical.topic_count == 0 {
        mistakes.push(Mistake::new(
            "Relevance",
            format!("No specific vocabulary detected for '{topic}'."),
            MistakeKind::Vocab,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_transcript_degrades_to_floor() {
        let result = analyze_speech("", 5.0, "Hometown");
        assert_eq!(result.criteria.fc.wpm, 0);
        assert_eq!(result.criteria.fc.fillers, 0);
        for score in result.scores() {
            assert_relative_eq!(score, 3.0);
        }
        assert_eq!(result.overall_band, "3.0");
        assert_eq!(result.transcript, "");
    }

    #[test]
    fn test_empty_transcript_still_flags_pace_and_relevance() {
        let result = analyze_speech("   ", 0.0, "Hometown");
        let texts: Vec<_> = result.mistakes.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Slow Pace", "Relevance"]);
    }

    #[test]
    fn test_agreement_error_and_concessive_clause() {
        let result = analyze_speech("I is happy because although it was good.", 5.0, "Hometown");
        assert!(result
            .criteria
            .gra
            .complex_structures
            .contains(&"Concessive Clause".to_string()));
        assert!(result
            .mistakes
            .iter()
            .any(|m| m.text == "I is" && m.kind == MistakeKind::Grammar));
    }

    #[test]
    fn test_look_forward_to_meeting_is_not_flagged() {
        let result = analyze_speech("I look forward to meeting you tomorrow", 3.0, "Hometown");
        assert!(!result
            .mistakes
            .iter()
            .any(|m| m.kind == MistakeKind::Grammar));
    }

    #[test]
    fn test_overall_band_is_mean_of_scores() {
        // 26 words in 12 seconds = 130 wpm, 169 characters
        let result = analyze_speech(
            "My hometown is a bustling metropolis with a historic district. \
             Although the commute is daunting, the heritage buildings which were renovated \
             are crucial to its identity.",
            12.0,
            "Hometown",
        );
        assert_eq!(result.scores(), [7.0, 7.0, 6.0, 7.5]);
        assert_eq!(
            result.criteria.gra.complex_structures,
            vec!["Passive Voice", "Relative Clause", "Concessive Clause"]
        );
        // (7.0 + 7.0 + 6.0 + 7.5) / 4 = 6.875
        assert_eq!(result.overall_band, "6.9");
    }

    #[test]
    fn test_mistake_order_and_basic_word_dedup() {
        // 13 words in 12 seconds = 65 wpm; 3 fillers
        let result = analyze_speech(
            "um it was good uh really good um he have a old house",
            12.0,
            "Hometown",
        );
        let texts: Vec<_> = result.mistakes.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Hesitation", "Slow Pace", "good", "really", "Relevance", "a o", "he have"]
        );
    }

    #[test]
    fn test_mistakes_are_capped() {
        let result = analyze_speech(
            "good bad nice happy sad big small thing stuff very lot get got",
            100.0,
            "Hometown",
        );
        assert_eq!(result.mistakes.len(), MAX_MISTAKES);
        assert_eq!(result.mistakes[0].text, "Slow Pace");
        assert!(result.mistakes[1..].iter().all(|m| m.kind == MistakeKind::Vocab));
    }

    #[test]
    fn test_unknown_topic_flags_relevance() {
        let result = analyze_speech("The rocket launch was impressive", 2.0, "Space Travel");
        assert!(result.criteria.lr.topic_words_used.is_empty());
        assert!(result
            .mistakes
            .iter()
            .any(|m| m.text == "Relevance" && m.issue.contains("Space Travel")));
        assert_eq!(
            result.criteria.lr.feedback,
            "Vocabulary is generic. Be more specific."
        );
    }

    #[test]
    fn test_topic_feedback_names_topic() {
        let result = analyze_speech("The commute through the district", 2.0, "Hometown");
        assert_eq!(
            result.criteria.lr.feedback,
            "Great use of \"Hometown\" vocabulary."
        );
    }

    #[test]
    fn test_scores_are_half_band_steps_in_range() {
        let result = analyze_speech(
            "Moreover, if I had finished, it was painted. Never have I seen it.",
            4.0,
            "Stories",
        );
        for score in result.scores() {
            assert!((3.0..=9.0).contains(&score));
            assert_relative_eq!((score * 2.0).fract(), 0.0);
        }
    }
}
