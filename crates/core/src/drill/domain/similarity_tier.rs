/// Coarse grading of a live similarity percentage for on-screen feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityTier {
    Low,
    Medium,
    High,
}

impl SimilarityTier {
    pub fn from_similarity(similarity: u8) -> Self {
        match similarity {
            s if s > 70 => SimilarityTier::High,
            s if s > 40 => SimilarityTier::Medium,
            _ => SimilarityTier::Low,
        }
    }
}

impl std::fmt::Display for SimilarityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimilarityTier::Low => write!(f, "low"),
            SimilarityTier::Medium => write!(f, "medium"),
            SimilarityTier::High => write!(f, "high"),
        }
    }
}
