//! Validation of generated descriptions against PIES rules.

use crate::models::description::ValidationResult;
use crate::services::catalog;

/// Characters that make a description unusable in a PIES XML payload.
/// Checked in this order; one issue is reported per character found.
const FORBIDDEN_CHARACTERS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Check a description against the code's character budget and the
/// forbidden-character set.
///
/// Length is counted in Unicode scalar values, not bytes. Issues are
/// ordered length-first, then characters in the fixed check order. Never
/// fails: an unknown code is checked against the default 255 budget.
pub fn validate(description_code: &str, text: &str) -> ValidationResult {
    let mut issues = Vec::new();

    let limit = catalog::max_length(description_code);
    if text.chars().count() > limit {
        issues.push(format!(
            "Description exceeds maximum length of {limit} characters"
        ));
    }

    for c in FORBIDDEN_CHARACTERS {
        if text.contains(c) {
            issues.push(format!("Description contains invalid character: {c}"));
        }
    }

    ValidationResult {
        is_valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compliant_text_passes() {
        let result = validate("FULL_DESC", "Heated oxygen sensor with OE-grade zirconia element");
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_over_length_flagged() {
        // SHORT_DESC allows 12 characters; 13 clean characters is one issue.
        let result = validate("SHORT_DESC", "O2 Sensor Kit");
        assert!(!result.is_valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(
            result.issues[0],
            "Description exceeds maximum length of 12 characters"
        );
    }

    #[test]
    fn test_each_forbidden_character_flagged_in_order() {
        let result = validate("FULL_DESC", "<>&");
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec![
                "Description contains invalid character: <",
                "Description contains invalid character: >",
                "Description contains invalid character: &",
            ]
        );
    }

    #[test]
    fn test_length_issue_ordered_before_character_issues() {
        let text = format!("{}<", "x".repeat(80));
        let result = validate("FULL_DESC", &text);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].contains("maximum length of 80"));
        assert!(result.issues[1].ends_with("invalid character: <"));
    }

    #[test]
    fn test_unknown_code_uses_default_budget() {
        let result = validate("NOT_A_CODE", &"x".repeat(255));
        assert!(result.is_valid);
        let result = validate("NOT_A_CODE", &"x".repeat(256));
        assert!(!result.is_valid);
        assert!(result.issues[0].contains("maximum length of 255"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Twelve non-ASCII characters fit SHORT_DESC even at 2+ bytes each.
        let result = validate("SHORT_DESC", &"é".repeat(12));
        assert!(result.is_valid);
    }
}
