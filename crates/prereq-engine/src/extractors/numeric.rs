// Numeric extraction: credit/unit counts
use std::collections::HashSet;

use shared_types::CreditCountRef;

use crate::patterns::CREDIT_PATTERNS;

/// Extracts credit-count requirements ("60 units", "30 credit hours").
///
/// Patterns run in order (credit hours, units, credits). Counts are unique by
/// value, so "60 units" and "60 credits" in the same text give one candidate.
/// Zero and values that do not fit a `u32` are skipped.
pub fn extract_credit_counts(text: &str) -> Vec<CreditCountRef> {
    let mut seen = HashSet::new();
    let mut counts = Vec::new();

    for pattern in CREDIT_PATTERNS.iter() {
        for cap in pattern.captures_iter(text) {
            let Some(num_match) = cap.get(1) else {
                continue;
            };
            let Ok(credits) = num_match.as_str().parse::<u32>() else {
                continue;
            };

            if credits > 0 && seen.insert(credits) {
                counts.push(CreditCountRef { credits });
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(text: &str) -> Vec<u32> {
        extract_credit_counts(text)
            .into_iter()
            .map(|c| c.credits)
            .collect()
    }

    #[test]
    fn test_extract_credit_counts() {
        assert_eq!(values("Must have completed 60 units."), vec![60]);
        assert_eq!(values("At least 30 credit hours of upper division"), vec![30]);
        assert_eq!(values("45 Credits"), vec![45]);
        assert_eq!(values("one unit of credit"), Vec::<u32>::new());
    }

    #[test]
    fn test_dedup_across_phrasings() {
        assert_eq!(
            values("Must complete 60 units. This means 60 credits total."),
            vec![60]
        );
        assert_eq!(values("60 credit hours, i.e. 60 credits"), vec![60]);
    }

    #[test]
    fn test_pattern_order_decides_output_order() {
        // "credit hours" runs before "units" regardless of text position
        assert_eq!(values("90 units including 15 credit hours"), vec![15, 90]);
    }

    #[test]
    fn test_zero_and_overflow_are_skipped() {
        assert_eq!(values("0 units"), Vec::<u32>::new());
        assert_eq!(values("99999999999999999999 credits and 12 units"), vec![12]);
    }

    #[test]
    fn test_requires_word_boundary() {
        assert!(values("60 unitsx").is_empty());
        assert!(values("CMPT120 units").is_empty());
    }
}
