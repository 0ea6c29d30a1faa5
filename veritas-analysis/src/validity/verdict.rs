//! The composite validity verdict.
//!
//! A deterministic rule table, not a weighted sum: the verdict is
//! always explainable by naming the specific triggers that fired.

use veritas_core::config::ValidityConfig;
use veritas_core::types::{OverallValidity, ValidityTrigger};

pub(crate) struct VerdictInput {
    pub social_desirability_bias: u8,
    pub impression_management: u8,
    /// `None` when no inconsistency pair was evaluable.
    pub consistency: Option<u8>,
    pub random_check_failed: bool,
    pub straight_lining: bool,
    pub speed_warning: bool,
}

/// Ordered guard clauses, hard flags first.
pub(crate) fn verdict(
    input: &VerdictInput,
    config: &ValidityConfig,
) -> (OverallValidity, Vec<ValidityTrigger>) {
    let mut triggers = Vec::new();

    // Hard flags force a low verdict.
    if input.random_check_failed {
        triggers.push(ValidityTrigger::RandomCheckFailed);
    }
    if input.straight_lining {
        triggers.push(ValidityTrigger::StraightLining);
    }
    if input.speed_warning {
        triggers.push(ValidityTrigger::SpeedWarning);
    }
    if input.social_desirability_bias >= config.distortion_high {
        triggers.push(ValidityTrigger::HighSocialDesirability);
    }
    if input.impression_management >= config.distortion_high {
        triggers.push(ValidityTrigger::HighImpressionManagement);
    }
    if !triggers.is_empty() {
        return (OverallValidity::Low, triggers);
    }

    // Moderate distortion caps the verdict at medium.
    if input.social_desirability_bias >= config.distortion_moderate {
        triggers.push(ValidityTrigger::ModerateSocialDesirability);
    }
    if input.impression_management >= config.distortion_moderate {
        triggers.push(ValidityTrigger::ModerateImpressionManagement);
    }
    if let Some(consistency) = input.consistency {
        if consistency < config.consistency_low {
            triggers.push(ValidityTrigger::LowConsistency);
        }
    }
    if !triggers.is_empty() {
        return (OverallValidity::Medium, triggers);
    }

    (OverallValidity::High, triggers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean() -> VerdictInput {
        VerdictInput {
            social_desirability_bias: 0,
            impression_management: 0,
            consistency: Some(100),
            random_check_failed: false,
            straight_lining: false,
            speed_warning: false,
        }
    }

    #[test]
    fn clean_attempt_is_high_with_no_triggers() {
        let (v, triggers) = verdict(&clean(), &ValidityConfig::default());
        assert_eq!(v, OverallValidity::High);
        assert!(triggers.is_empty());
    }

    #[test]
    fn any_hard_flag_forces_low() {
        let config = ValidityConfig::default();
        for flag in 0..3 {
            let mut input = clean();
            match flag {
                0 => input.random_check_failed = true,
                1 => input.straight_lining = true,
                _ => input.speed_warning = true,
            }
            let (v, triggers) = verdict(&input, &config);
            assert_eq!(v, OverallValidity::Low);
            assert_eq!(triggers.len(), 1);
        }
    }

    #[test]
    fn high_distortion_forces_low() {
        let mut input = clean();
        input.social_desirability_bias = 75;
        let (v, triggers) = verdict(&input, &ValidityConfig::default());
        assert_eq!(v, OverallValidity::Low);
        assert_eq!(triggers, vec![ValidityTrigger::HighSocialDesirability]);
    }

    #[test]
    fn moderate_distortion_caps_at_medium() {
        let mut input = clean();
        input.impression_management = 50;
        let (v, triggers) = verdict(&input, &ValidityConfig::default());
        assert_eq!(v, OverallValidity::Medium);
        assert_eq!(triggers, vec![ValidityTrigger::ModerateImpressionManagement]);
    }

    #[test]
    fn low_consistency_caps_at_medium() {
        let mut input = clean();
        input.consistency = Some(50);
        let (v, triggers) = verdict(&input, &ValidityConfig::default());
        assert_eq!(v, OverallValidity::Medium);
        assert_eq!(triggers, vec![ValidityTrigger::LowConsistency]);
    }

    #[test]
    fn unevaluated_consistency_never_triggers() {
        let mut input = clean();
        input.consistency = None;
        let (v, _) = verdict(&input, &ValidityConfig::default());
        assert_eq!(v, OverallValidity::High);
    }
}
