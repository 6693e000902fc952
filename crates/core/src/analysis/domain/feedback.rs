use serde::{Deserialize, Serialize};

/// Which part of the answer a flagged mistake belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MistakeKind {
    Grammar,
    Vocab,
    Fluency,
}

impl std::fmt::Display for MistakeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MistakeKind::Grammar => write!(f, "grammar"),
            MistakeKind::Vocab => write!(f, "vocab"),
            MistakeKind::Fluency => write!(f, "fluency"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mistake {
    pub text: String,
    pub issue: String,
    #[serde(rename = "type")]
    pub kind: MistakeKind,
}

impl Mistake {
    pub fn new(text: impl Into<String>, issue: impl Into<String>, kind: MistakeKind) -> Self {
        Self {
            text: text.into(),
            issue: issue.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluencyCoherence {
    pub score: f64,
    pub feedback: String,
    pub wpm: u32,
    pub fillers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalResource {
    pub score: f64,
    pub feedback: String,
    pub advanced_words_used: Vec<String>,
    pub topic_words_used: Vec<String>,
    pub repeated_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarRange {
    pub score: f64,
    pub feedback: String,
    pub complex_structures: Vec<String>,
}

/// Pronunciation band estimated from text features only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub score: f64,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub fc: FluencyCoherence,
    pub lr: LexicalResource,
    pub gra: GrammarRange,
    pub p: Pronunciation,
}

/// Four-criterion assessment of one spoken answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub overall_band: String,
    pub transcript: String,
    pub criteria: Criteria,
    pub mistakes: Vec<Mistake>,
}

impl FeedbackResult {
    /// Criterion bands in FC, LR, GRA, P order.
    pub fn scores(&self) -> [f64; 4] {
        [
            self.criteria.fc.score,
            self.criteria.lr.score,
            self.criteria.gra.score,
            self.criteria.p.score,
        ]
    }
}
