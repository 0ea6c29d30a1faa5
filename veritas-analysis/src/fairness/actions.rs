//! Remediation action lookup.
//!
//! Actions are keyed by which checks failed — a lookup table, not
//! free-text generation.

use veritas_core::types::{BiasSeverity, ComplianceChecks};

pub(crate) fn recommended_actions(
    checks: &ComplianceChecks,
    severity: BiasSeverity,
) -> Vec<String> {
    let mut actions = Vec::new();

    if !checks.four_fifths {
        actions.push(
            "Adverse-impact ratio below the four-fifths threshold: expand the normative sample \
             and review item-level group differences."
                .to_string(),
        );
    }
    if !checks.eeo {
        actions.push(
            "EEO check failed: document job-relatedness evidence and evaluate alternative \
             selection procedures with less adverse impact."
                .to_string(),
        );
    }
    if !checks.ada {
        actions.push(
            "ADA check failed: review accommodation options and verify the assessment format \
             is accessible to all candidate groups."
                .to_string(),
        );
    }
    if severity >= BiasSeverity::High {
        actions.push(
            "Severity high or critical: suspend automated screening on this assessment until \
             a validation study is completed."
                .to_string(),
        );
    }

    actions
}

pub(crate) fn insufficient_sample_action(floor: usize) -> String {
    format!(
        "Collect additional responses until every demographic group reaches {floor} \
         respondents; ratios over smaller groups are not defensible."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_checks_yield_no_actions() {
        let checks = ComplianceChecks {
            four_fifths: true,
            eeo: true,
            ada: true,
        };
        assert!(recommended_actions(&checks, BiasSeverity::Low).is_empty());
    }

    #[test]
    fn each_failed_check_contributes_one_action() {
        let checks = ComplianceChecks {
            four_fifths: false,
            eeo: false,
            ada: true,
        };
        let actions = recommended_actions(&checks, BiasSeverity::Medium);
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn critical_severity_adds_suspension() {
        let checks = ComplianceChecks {
            four_fifths: false,
            eeo: false,
            ada: false,
        };
        let actions = recommended_actions(&checks, BiasSeverity::Critical);
        assert_eq!(actions.len(), 4);
    }
}
