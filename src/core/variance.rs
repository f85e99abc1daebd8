use crate::domain::model::{BreakStatus, VarianceResult};
use crate::utils::num_parser::parse_float;

const OVERBREAK_COLOR: &str = "orange";
const UNDERBREAK_COLOR: &str = "red";
const ON_TARGET_COLOR: &str = "limegreen";

/// Computes the overbreak/underbreak variance for a production entry.
///
/// Takes the raw text of the expected and actual tonnage fields and returns
/// the full presentation snapshot. Unparseable or empty input is normal, not
/// an error: the result carries no variance, an empty display text and no
/// color, which clears the display downstream.
///
/// The classification keeps the comparison order of the form script: variance
/// greater than zero is overbreak, less than zero underbreak, everything else
/// (including a NaN from infinite inputs) falls through to on-target.
pub fn compute(expected_raw: &str, actual_raw: &str) -> VarianceResult {
    let expected = parse_float(expected_raw);
    let actual = parse_float(actual_raw);

    let (Some(e), Some(a)) = (expected, actual) else {
        return VarianceResult {
            expected,
            actual,
            variance: None,
            status: BreakStatus::Unknown,
            display_text: String::new(),
            display_color: None,
        };
    };

    let variance = a - e;
    let (status, display_text, display_color) = if variance > 0.0 {
        (
            BreakStatus::Overbreak,
            format!(
                "⚠️ Overbreak (+{:.2} t) — possible grade dilution.",
                variance
            ),
            OVERBREAK_COLOR,
        )
    } else if variance < 0.0 {
        (
            BreakStatus::Underbreak,
            format!(
                "❗ Underbreak ({:.2} t) — possible loss in tonnage.",
                variance
            ),
            UNDERBREAK_COLOR,
        )
    } else {
        (
            BreakStatus::OnTarget,
            "✅ On Target (0.00 t)".to_string(),
            ON_TARGET_COLOR,
        )
    };

    VarianceResult {
        expected,
        actual,
        variance: Some(variance),
        status,
        display_text,
        display_color: Some(display_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overbreak() {
        let result = compute("100", "105");
        assert_eq!(result.status, BreakStatus::Overbreak);
        assert_eq!(result.variance, Some(5.0));
        assert_eq!(
            result.display_text,
            "⚠️ Overbreak (+5.00 t) — possible grade dilution."
        );
        assert_eq!(result.display_color, Some("orange"));
        assert_eq!(result.variance_field(), "5.00");
    }

    #[test]
    fn test_underbreak() {
        let result = compute("100", "95");
        assert_eq!(result.status, BreakStatus::Underbreak);
        assert_eq!(result.variance, Some(-5.0));
        assert_eq!(
            result.display_text,
            "❗ Underbreak (-5.00 t) — possible loss in tonnage."
        );
        assert_eq!(result.display_color, Some("red"));
        assert_eq!(result.variance_field(), "-5.00");
    }

    #[test]
    fn test_on_target() {
        let result = compute("100", "100");
        assert_eq!(result.status, BreakStatus::OnTarget);
        assert_eq!(result.variance, Some(0.0));
        assert_eq!(result.display_text, "✅ On Target (0.00 t)");
        assert_eq!(result.display_color, Some("limegreen"));
        assert_eq!(result.variance_field(), "0.00");
    }

    #[test]
    fn test_absent_input_is_unknown() {
        for (expected, actual) in [("", "50"), ("abc", "50"), ("100", ""), ("", "")] {
            let result = compute(expected, actual);
            assert_eq!(result.status, BreakStatus::Unknown);
            assert_eq!(result.variance, None);
            assert_eq!(result.display_text, "");
            assert_eq!(result.display_color, None);
            assert_eq!(result.variance_field(), "");
        }
    }

    #[test]
    fn test_permissive_parsing_carries_through() {
        let result = compute(" 100 t", "103.5kg");
        assert_eq!(result.status, BreakStatus::Overbreak);
        assert_eq!(result.variance, Some(3.5));
    }
}
