use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.,/#!$%^&*;:{}=\-_`~()]").expect("literal pattern"));

/// Raw material for one analysis run, as handed over by the recorder.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisInput {
    pub transcript: String,
    pub duration_seconds: f64,
    pub topic: String,
}

impl AnalysisInput {
    pub fn new(transcript: &str, duration_seconds: f64, topic: &str) -> Self {
        Self {
            transcript: transcript.to_string(),
            duration_seconds,
            topic: topic.to_string(),
        }
    }
}

/// Word-level view of a transcript shared by every criterion.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptStats {
    /// Trimmed transcript with its original casing.
    pub transcript: String,
    /// Lowercased words with punctuation stripped.
    pub words: Vec<String>,
    /// Duration actually used for rate calculations, never below one second.
    pub duration_seconds: f64,
    pub wpm: u32,
    pub sentence_count: usize,
}

impl TranscriptStats {
    pub fn from_input(input: &AnalysisInput) -> Self {
        let transcript = input.transcript.trim().to_string();
        let lower = transcript.to_lowercase();
        let words: Vec<String> = PUNCTUATION
            .replace_all(&lower, "")
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let duration_seconds = if input.duration_seconds.is_finite() {
            input.duration_seconds.max(1.0)
        } else {
            1.0
        };
        let wpm = (words.len() as f64 / duration_seconds * 60.0).round() as u32;

        let sentence_count = transcript
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count();

        Self {
            transcript,
            words,
            duration_seconds,
            wpm,
            sentence_count,
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn avg_sentence_length(&self) -> f64 {
        self.word_count() as f64 / self.sentence_count.max(1) as f64
    }

    /// Characters of the trimmed transcript (spaces included) per word.
    pub fn avg_word_length(&self) -> f64 {
        self.transcript.chars().count() as f64 / self.word_count().max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn stats(transcript: &str, duration: f64) -> TranscriptStats {
        TranscriptStats::from_input(&AnalysisInput::new(transcript, duration, "Hometown"))
    }

    #[test]
    fn test_words_are_lowercased_and_stripped() {
        let s = stats("  Hello, World! It's (really) fine.  ", 10.0);
        assert_eq!(s.transcript, "Hello, World! It's (really) fine.");
        assert_eq!(s.words, vec!["hello", "world", "it's", "really", "fine"]);
    }

    #[test]
    fn test_empty_transcript() {
        let s = stats("   ", 5.0);
        assert!(s.is_empty());
        assert_eq!(s.wpm, 0);
        assert_eq!(s.sentence_count, 0);
        assert_relative_eq!(s.avg_sentence_length(), 0.0);
        assert_relative_eq!(s.avg_word_length(), 0.0);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-3.0)]
    #[case::not_a_number(f64::NAN)]
    #[case::sub_second(0.25)]
    fn test_degenerate_duration_defaults_to_one_second(#[case] duration: f64) {
        let s = stats("one two three", duration);
        assert_relative_eq!(s.duration_seconds, 1.0);
        assert_eq!(s.wpm, 180);
    }

    #[test]
    fn test_wpm_rounds() {
        // 7 words in 4 seconds = 105 wpm
        let s = stats("a b c d e f g", 4.0);
        assert_eq!(s.wpm, 105);
    }

    #[test]
    fn test_sentence_count_ignores_empty_fragments() {
        let s = stats("First one. Second one!! Third one?  ", 10.0);
        assert_eq!(s.sentence_count, 3);
        assert_relative_eq!(s.avg_sentence_length(), 2.0);
    }

    #[test]
    fn test_avg_word_length_counts_spaces() {
        let s = stats("abcd efgh", 10.0);
        assert_relative_eq!(s.avg_word_length(), 4.5);
    }
}
