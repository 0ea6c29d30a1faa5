//! Default thresholds, increments, and floors.
//!
//! Every value here is a *default*; the corresponding config struct can
//! override each one per assessment or jurisdiction. Logic modules must
//! read from config, never from these constants directly.

/// Default Likert scale lower bound.
pub const LIKERT_MIN: u8 = 1;
/// Default Likert scale upper bound.
pub const LIKERT_MAX: u8 = 5;

/// Level banding defaults: below `LEVEL_MODERATE` is low/developing.
pub const LEVEL_MODERATE: u8 = 55;
pub const LEVEL_HIGH: u8 = 70;
pub const LEVEL_EXCEPTIONAL: u8 = 85;

/// Each endorsed implausible-positive item adds this to social desirability bias.
pub const FAKE_GOOD_INCREMENT: u8 = 25;
/// Each endorsed implausible-negative item adds this to impression management.
pub const FAKE_BAD_INCREMENT: u8 = 25;

/// Distortion score at or above this forces a `low` validity verdict.
pub const DISTORTION_HIGH: u8 = 75;
/// Distortion score at or above this caps the verdict at `medium`.
pub const DISTORTION_MODERATE: u8 = 50;
/// Consistency below this caps the verdict at `medium`.
pub const CONSISTENCY_LOW: u8 = 60;

/// Sliding-window length for straight-lining detection.
pub const STRAIGHTLINE_WINDOW: usize = 10;
/// Minimum population variance a window must show to count as engaged.
pub const STRAIGHTLINE_MIN_VARIANCE: f64 = 0.25;

/// Median per-item latency below this raises a speed warning.
pub const MIN_ITEM_RESPONSE_MS: u32 = 1200;

/// Four-fifths rule threshold (boundary inclusive).
pub const FOUR_FIFTHS_THRESHOLD: u8 = 80;
/// Minimum respondents per demographic group for a defensible ratio.
pub const MIN_GROUP_SIZE: usize = 30;
/// EEO check: minimum adverse-impact ratio.
pub const EEO_MIN_RATIO: u8 = 80;
/// ADA check: minimum absolute pass rate for the lowest group (percent).
pub const ADA_MIN_PASS_RATE: u8 = 25;

/// Compliance status banding.
pub const COMPLIANT_MIN: u8 = 80;
pub const PARTIAL_MIN: u8 = 50;

/// Risk banding over the lowest risk-relevant dimension percentage.
pub const RISK_LOW_MIN: u8 = 70;
pub const RISK_MODERATE_MIN: u8 = 55;
pub const RISK_HIGH_MIN: u8 = 40;

/// Strengths/challenges list length.
pub const TOP_N: usize = 3;
