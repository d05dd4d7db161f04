//! Choosing the governing rule among matches.
//!
//! Two passes over the matches in evaluation order: the first finds the
//! strictest result, the second gathers every citation.

use crate::model::Rule;
use firegap_types::ClearanceSource;

/// Whether `candidate` replaces `current` as the governing rule.
///
/// Only a strictly larger clearance wins, so on a tie the rule seen first
/// keeps its place.
pub fn is_stricter(candidate: &Rule, current: &Rule) -> bool {
    candidate.result.min_clearance_mm > current.result.min_clearance_mm
}

/// Pass one: the governing rule, or `None` for an empty slice.
pub fn strictest<'a>(matches: &[&'a Rule]) -> Option<&'a Rule> {
    matches.iter().copied().fold(None, |best, rule| match best {
        Some(current) if !is_stricter(rule, current) => Some(current),
        _ => Some(rule),
    })
}

/// Pass two: one citation per match, in evaluation order.
///
/// Two rules citing the same approval section both appear.
pub fn union_sources(matches: &[&Rule]) -> Vec<ClearanceSource> {
    matches.iter().filter_map(|r| r.source()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abp_record, rule};

    #[test]
    fn tie_keeps_first_seen() {
        let a = rule(&abp_record("a", 25, Vec::new()));
        let b = rule(&abp_record("b", 25, Vec::new()));
        assert!(!is_stricter(&b, &a));
        assert!(!is_stricter(&a, &b));
        assert_eq!(strictest(&[&a, &b]).map(|r| r.id.as_str()), Some("a"));
        assert_eq!(strictest(&[&b, &a]).map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn larger_clearance_wins_regardless_of_position() {
        let low = rule(&abp_record("low", 0, Vec::new()));
        let high = rule(&abp_record("high", 40, Vec::new()));
        let mid = rule(&abp_record("mid", 25, Vec::new()));
        assert_eq!(
            strictest(&[&low, &high, &mid]).map(|r| r.id.as_str()),
            Some("high")
        );
    }

    #[test]
    fn empty_matches_have_no_strictest() {
        assert!(strictest(&[]).is_none());
    }

    #[test]
    fn every_match_is_cited_even_when_citations_coincide() {
        let a = rule(&abp_record("a", 0, Vec::new()));
        let same = rule(&abp_record("a", 10, Vec::new()));
        let b = rule(&abp_record("b", 25, Vec::new()));

        let sources = union_sources(&[&a, &same, &b]);
        let numbers: Vec<_> = sources.iter().filter_map(|s| s.number.as_deref()).collect();
        assert_eq!(numbers, vec!["A", "A", "B"]);
        assert_eq!(sources[0], sources[1]);
    }
}
