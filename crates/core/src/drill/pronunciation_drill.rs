use thiserror::Error;

use crate::drill::domain::drill_stage::{DrillStage, VoiceCue};
use crate::drill::domain::similarity_tier::SimilarityTier;
use crate::matching::domain::word_matcher::{
    calculate_similarity, get_word_match_status, target_words,
};
use crate::shared::constants::{DRILL_ATTEMPT_SECONDS, DRILL_PASS_THRESHOLD};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DrillError {
    #[error("drill target phrase is empty")]
    EmptyTarget,
    #[error("cannot {action} during {stage}")]
    WrongStage {
        action: &'static str,
        stage: DrillStage,
    },
}

/// Final result of a completed drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillOutcome {
    pub score: u8,
    pub passed: bool,
}

/// Listen-and-repeat pronunciation drill for one target phrase.
///
/// The drill only tracks stages and scores. Playing voices, recording and
/// the attempt timer belong to the caller, which reports back through
/// [`playback_finished`](Self::playback_finished),
/// [`live_transcript`](Self::live_transcript) and
/// [`attempt_finished`](Self::attempt_finished).
pub struct PronunciationDrill {
    target: String,
    pass_threshold: u8,
    stage: DrillStage,
    live_similarity: u8,
    attempt_scores: Vec<u8>,
}

impl PronunciationDrill {
    pub fn new(target: &str) -> Result<Self, DrillError> {
        if target.trim().is_empty() {
            return Err(DrillError::EmptyTarget);
        }
        Ok(Self {
            target: target.to_string(),
            pass_threshold: DRILL_PASS_THRESHOLD,
            stage: DrillStage::Intro,
            live_similarity: 0,
            attempt_scores: Vec::new(),
        })
    }

    pub fn with_pass_threshold(mut self, threshold: u8) -> Self {
        self.pass_threshold = threshold.min(100);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn stage(&self) -> DrillStage {
        self.stage
    }

    pub fn progress(&self) -> usize {
        self.stage.progress()
    }

    /// Similarity from the most recent live transcript of the current attempt.
    pub fn live_similarity(&self) -> u8 {
        self.live_similarity
    }

    pub fn live_tier(&self) -> SimilarityTier {
        SimilarityTier::from_similarity(self.live_similarity)
    }

    /// Scores of the attempts finished so far, in order.
    pub fn attempt_scores(&self) -> &[u8] {
        &self.attempt_scores
    }

    /// Leaves the intro and returns the first voice to play.
    pub fn start(&mut self) -> Result<VoiceCue, DrillError> {
        self.expect(DrillStage::Intro == self.stage, "start")?;
        self.advance();
        self.stage.voice_cue().ok_or(DrillError::WrongStage {
            action: "start",
            stage: self.stage,
        })
    }

    /// The voice finished playing; the learner's attempt begins.
    pub fn playback_finished(&mut self) -> Result<DrillStage, DrillError> {
        self.expect(self.stage.is_listening(), "finish playback")?;
        self.advance();
        self.live_similarity = 0;
        Ok(self.stage)
    }

    /// Rescores the attempt against a fresher partial transcript.
    pub fn live_transcript(&mut self, transcript: &str) -> Result<u8, DrillError> {
        self.expect(self.stage.is_attempt(), "score a live transcript")?;
        self.live_similarity = calculate_similarity(&self.target, transcript);
        Ok(self.live_similarity)
    }

    /// Words that [`word_matches`](Self::word_matches) reports on, in order.
    pub fn target_words(&self) -> Vec<String> {
        target_words(&self.target)
    }

    /// Per-word highlight mask for the target against `transcript`.
    pub fn word_matches(&self, transcript: &str) -> Vec<bool> {
        get_word_match_status(&self.target, transcript)
    }

    /// Closes the attempt window with the final transcript for that attempt.
    ///
    /// Returns the stage entered next: a listening step, or
    /// [`DrillStage::Feedback`] after the final attempt.
    pub fn attempt_finished(&mut self, transcript: &str) -> Result<DrillStage, DrillError> {
        self.expect(self.stage.is_attempt(), "finish an attempt")?;
        let score = calculate_similarity(&self.target, transcript);
        self.attempt_scores.push(score);
        self.live_similarity = score;
        self.advance();
        Ok(self.stage)
    }

    /// Score and verdict once the drill reaches feedback.
    pub fn outcome(&self) -> Option<DrillOutcome> {
        if self.stage != DrillStage::Feedback {
            return None;
        }
        let score = self.attempt_scores.last().copied().unwrap_or(0);
        Some(DrillOutcome {
            score,
            passed: score >= self.pass_threshold,
        })
    }

    /// Recording window the caller should allow for each attempt.
    pub fn attempt_seconds(&self) -> u32 {
        DRILL_ATTEMPT_SECONDS
    }

    /// Voice to play for the current stage, if it is a listening step.
    pub fn voice_cue(&self) -> Option<VoiceCue> {
        self.stage.voice_cue()
    }

    pub fn retry(&mut self) {
        log::info!("Drill reset for \"{}\"", self.target);
        self.stage = DrillStage::Intro;
        self.live_similarity = 0;
        self.attempt_scores.clear();
    }

    fn expect(&self, allowed: bool, action: &'static str) -> Result<(), DrillError> {
        if allowed {
            Ok(())
        } else {
            Err(DrillError::WrongStage {
                action,
                stage: self.stage,
            })
        }
    }

    fn advance(&mut self) {
        let next = self.stage.next();
        log::info!("Drill stage: {} -> {}", self.stage, next);
        self.stage = next;
    }
}
