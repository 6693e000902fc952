/// Lowest band any criterion can be awarded.
pub const BAND_FLOOR: f64 = 3.0;
/// Highest band any criterion can be awarded.
pub const BAND_CEILING: f64 = 9.0;
/// Starting point for every criterion before bonuses and penalties.
pub const BAND_BASE: f64 = 5.0;

pub const MAX_MISTAKES: usize = 8;

/// Input positions searched ahead of the cursor for each target word.
pub const MATCH_HORIZON: usize = 6;

/// Similarity percentage a drill needs to pass.
pub const DRILL_PASS_THRESHOLD: u8 = 70;
/// Length of each recorded drill attempt, in seconds.
pub const DRILL_ATTEMPT_SECONDS: u32 = 5;
