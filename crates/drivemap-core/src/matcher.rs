//! First-match lookup of candidates against a mapping.

use tracing::{debug, trace};

use crate::mapping::{Mapping, MappingEntry};

/// Result of scanning the mapping for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// `index` is the position of the winning entry in the mapping.
    Matched { index: usize, label: String },
    /// The mapping was exhausted without a hit.
    Unmatched,
}

impl MatchOutcome {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Matched { label, .. } => Some(label),
            Self::Unmatched => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub candidate: String,
    pub outcome: MatchOutcome,
}

/// Outcomes for a candidate list, in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub results: Vec<CandidateMatch>,
}

impl MatchReport {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn matched_count(&self) -> usize {
        self.results
            .iter()
            .filter(|result| result.outcome.is_match())
            .count()
    }

    /// `(candidate, label)` pairs for candidates that matched.
    pub fn matched(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results.iter().filter_map(|result| {
            result
                .outcome
                .label()
                .map(|label| (result.candidate.as_str(), label))
        })
    }
}

impl Mapping {
    /// The first entry, in stored order, whose pattern matches `candidate`.
    pub fn first_match(&self, candidate: &str) -> Option<&MappingEntry> {
        self.find_entry(candidate).map(|(_, entry)| entry)
    }

    pub fn find(&self, candidate: &str) -> MatchOutcome {
        match self.find_entry(candidate) {
            Some((index, entry)) => MatchOutcome::Matched {
                index,
                label: entry.label.clone(),
            },
            None => MatchOutcome::Unmatched,
        }
    }

    fn find_entry(&self, candidate: &str) -> Option<(usize, &MappingEntry)> {
        self.iter().enumerate().find(|(index, entry)| {
            let hit = entry.pattern.is_match(candidate);
            trace!(index, pattern = %entry.pattern, hit, "tested pattern");
            hit
        })
    }
}

/// Look up every candidate, keeping candidate order.
pub fn match_candidates<I, S>(mapping: &Mapping, candidates: I) -> MatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let results = candidates
        .into_iter()
        .map(|candidate| {
            let candidate = candidate.as_ref();
            let outcome = mapping.find(candidate);
            match &outcome {
                MatchOutcome::Matched { index, label } => {
                    debug!(candidate, index, label = %label, "matched");
                }
                MatchOutcome::Unmatched => debug!(candidate, "no pattern matched"),
            }
            CandidateMatch {
                candidate: candidate.to_string(),
                outcome,
            }
        })
        .collect();
    MatchReport { results }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::InvalidPatternPolicy;

    fn mapping(json: &str) -> Mapping {
        Mapping::from_json_str(json, InvalidPatternPolicy::Fail).unwrap()
    }

    #[test]
    fn first_matching_entry_wins() {
        let mapping = mapping(r#"{"/sunet\\.se$/": "specific", "/\\.se$/": "generic"}"#);
        assert_eq!(
            mapping.find("name@sunet.se"),
            MatchOutcome::Matched {
                index: 0,
                label: "specific".to_string()
            }
        );
        assert_eq!(mapping.find("name@hh.se").label(), Some("generic"));
    }

    #[test]
    fn order_decides_overlapping_patterns() {
        let mapping = mapping(r#"{"/\\.se$/": "generic", "/sunet\\.se$/": "specific"}"#);
        assert_eq!(mapping.first_match("name@sunet.se").unwrap().label, "generic");
    }

    #[test]
    fn unmatched_candidate() {
        let mapping = mapping(r#"{"^nomatch$": "X"}"#);
        assert_eq!(mapping.find("name@sunet.se"), MatchOutcome::Unmatched);
        assert!(mapping.first_match("name@sunet.se").is_none());
    }

    #[test]
    fn report_keeps_candidate_order() {
        let mapping = mapping(r#"{"@hh\\.se$": "hh", "@sunet\\.se$": "sunet"}"#);
        let report = match_candidates(&mapping, ["a@sunet.se", "b@example.org", "c@hh.se"]);
        assert_eq!(report.len(), 3);
        assert_eq!(report.matched_count(), 2);
        let matched: Vec<_> = report.matched().collect();
        assert_eq!(matched, vec![("a@sunet.se", "sunet"), ("c@hh.se", "hh")]);
    }

    #[test]
    fn empty_mapping_matches_nothing() {
        let report = match_candidates(&Mapping::default(), ["name@sunet.se"]);
        assert_eq!(report.matched_count(), 0);
        assert_eq!(report.results[0].outcome, MatchOutcome::Unmatched);
    }
}
