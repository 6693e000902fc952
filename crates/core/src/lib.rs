//! Offline scoring engine for speaking practice.
//!
//! Two entry points cover most callers: [`analyze_speech`] turns a final
//! transcript into a four-criterion band report, and
//! [`calculate_similarity`] / [`get_word_match_status`] align a live
//! transcript against a reference phrase.

pub mod analysis {
    pub mod domain {
        pub mod feedback;
        pub mod fluency;
        pub mod grammar;
        pub mod lexical;
        pub mod pronunciation;
        pub mod transcript;
    }
    pub mod speech_analyzer;
}

pub mod drill {
    pub mod domain {
        pub mod drill_stage;
        pub mod similarity_tier;
    }
    pub mod pronunciation_drill;
}

pub mod lexicon {
    pub mod grammar_rules;
    pub mod vocabulary;
}

pub mod matching {
    pub mod domain {
        pub mod phonetic;
        pub mod word_matcher;
    }
}

pub mod report {
    pub mod feedback_reporter;
}

pub mod shared {
    pub mod band;
    pub mod constants;
}

pub use analysis::domain::feedback::FeedbackResult;
pub use analysis::speech_analyzer::analyze_speech;
pub use matching::domain::word_matcher::{calculate_similarity, get_word_match_status};
