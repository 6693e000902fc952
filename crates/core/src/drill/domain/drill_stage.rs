/// Synthetic voice the caller should use for a listening step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceProfile {
    FemaleA,
    Male,
    FemaleB,
}

/// What to play during a listening step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceCue {
    pub voice: VoiceProfile,
    pub rate: f32,
    pub pitch: f32,
}

/// Steps of a listen-and-repeat drill, in the order they are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillStage {
    Intro,
    ListenFemaleA,
    FirstAttempt,
    ListenMale,
    SecondAttempt,
    ListenFemaleB,
    FinalAttempt,
    Feedback,
}

impl DrillStage {
    /// The six listen/attempt steps shown in the progress indicator.
    pub const STEPS: [DrillStage; 6] = [
        DrillStage::ListenFemaleA,
        DrillStage::FirstAttempt,
        DrillStage::ListenMale,
        DrillStage::SecondAttempt,
        DrillStage::ListenFemaleB,
        DrillStage::FinalAttempt,
    ];

    pub fn next(self) -> DrillStage {
        match self {
            DrillStage::Intro => DrillStage::ListenFemaleA,
            DrillStage::ListenFemaleA => DrillStage::FirstAttempt,
            DrillStage::FirstAttempt => DrillStage::ListenMale,
            DrillStage::ListenMale => DrillStage::SecondAttempt,
            DrillStage::SecondAttempt => DrillStage::ListenFemaleB,
            DrillStage::ListenFemaleB => DrillStage::FinalAttempt,
            DrillStage::FinalAttempt | DrillStage::Feedback => DrillStage::Feedback,
        }
    }

    pub fn voice_cue(self) -> Option<VoiceCue> {
        let (voice, rate, pitch) = match self {
            DrillStage::ListenFemaleA => (VoiceProfile::FemaleA, 0.8, 1.0),
            DrillStage::ListenMale => (VoiceProfile::Male, 0.8, 0.9),
            DrillStage::ListenFemaleB => (VoiceProfile::FemaleB, 0.85, 1.0),
            _ => return None,
        };
        Some(VoiceCue { voice, rate, pitch })
    }

    pub fn is_listening(self) -> bool {
        self.voice_cue().is_some()
    }

    pub fn is_attempt(self) -> bool {
        matches!(
            self,
            DrillStage::FirstAttempt | DrillStage::SecondAttempt | DrillStage::FinalAttempt
        )
    }

    /// Number of steps already completed; 0 at the intro, 6 at feedback.
    pub fn progress(self) -> usize {
        match self {
            DrillStage::Intro => 0,
            DrillStage::Feedback => Self::STEPS.len(),
            stage => Self::STEPS
                .iter()
                .position(|s| *s == stage)
                .unwrap_or_default(),
        }
    }
}

impl std::fmt::Display for DrillStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DrillStage::Intro => "intro",
            DrillStage::ListenFemaleA => "listening (female voice A)",
            DrillStage::FirstAttempt => "first attempt",
            DrillStage::ListenMale => "listening (male voice)",
            DrillStage::SecondAttempt => "second attempt",
            DrillStage::ListenFemaleB => "listening (female voice B)",
            DrillStage::FinalAttempt => "final attempt",
            DrillStage::Feedback => "feedback",
        };
        write!(f, "{name}")
    }
}
