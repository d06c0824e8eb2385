use drivemap_core::{
    Mapping, MappingEntry, Pattern, format_line, match_candidates, render_report,
};
use proptest::prelude::*;

/// Literal-substring patterns let the expected first match be computed with `contains`.
fn literal_mapping(needles: &[String]) -> Mapping {
    let entries = needles
        .iter()
        .enumerate()
        .map(|(index, needle)| {
            let pattern = Pattern::compile(&regex::escape(needle)).expect("escaped literal");
            MappingEntry::new(pattern, format!("label-{index}"))
        })
        .collect();
    Mapping::new(entries)
}

proptest! {
    #[test]
    fn label_comes_from_first_matching_entry(
        needles in prop::collection::vec("[a-d@.]{1,3}", 0..6),
        candidate in "[a-d@.]{0,12}",
    ) {
        let mapping = literal_mapping(&needles);
        let expected = needles
            .iter()
            .position(|needle| candidate.contains(needle.as_str()))
            .map(|index| format!("label-{index}"));
        let actual = mapping.first_match(&candidate).map(|entry| entry.label.clone());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn lines_follow_candidate_order(
        needles in prop::collection::vec("[a-d]{1,2}", 1..4),
        candidates in prop::collection::vec("[a-e]{1,6}", 0..10),
    ) {
        let mapping = literal_mapping(&needles);
        let report = match_candidates(&mapping, &candidates);
        let output = render_report(&report, 35);
        let printed: Vec<&str> = output
            .lines()
            .map(|line| line.rsplit_once(": ").map_or(line, |(field, _)| field).trim_start())
            .collect();
        let expected: Vec<&str> = candidates
            .iter()
            .filter(|candidate| mapping.first_match(candidate).is_some())
            .map(String::as_str)
            .collect();
        prop_assert_eq!(printed, expected);
    }

    #[test]
    fn field_is_right_justified_to_width(candidate in "[a-z.@-]{0,50}", width in 0usize..60) {
        let line = format_line(&candidate, "node", width);
        let field = line.strip_suffix(": node").expect("label suffix");
        if candidate.chars().count() < width {
            prop_assert_eq!(field.chars().count(), width);
            prop_assert!(field.ends_with(candidate.as_str()));
            prop_assert!(field[..field.len() - candidate.len()].chars().all(|c| c == ' '));
        } else {
            prop_assert_eq!(field, candidate.as_str());
        }
    }
}
