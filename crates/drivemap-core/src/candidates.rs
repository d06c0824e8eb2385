//! Candidate identifiers to check against a mapping.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::CandidateError;

/// Built-in candidates covering direct, sub-domain, and look-alike addresses.
pub const DEFAULT_CANDIDATES: &[&str] = &[
    "name@sunet.se",
    "first.last@sunet.se",
    "first.last@hh.se",
    "first.last@shh.se",
    "name@sub.sunet.se",
    "first.last@sub.sunet.se",
    "first.last@sub.hh.se",
    "first.last@sub.shh.se",
    "name@sub.inst.sunet.se",
    "first.last@sub.inst.sunet.se",
    "first.last@sub.inst.hh.se",
    "first.last@sub.inst.shh.se",
    "sunet.se@sub.inst.sunet.se",
    "ki.se@sub.inst.sunet.se",
    "sub.inst.shh.se@sub.inst.hh.se",
    "sub.inst.hh.se@sub.inst.shh.se",
    "@.shh.se",
    "some@.hh.se",
    "some@inst.shhs",
    "sunet.se",
    "some-user@eduid.se",
    "ki.se@somedomain.edu",
    "ki.se@ki.se.somedomain.edu",
];

pub fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(ToString::to_string).collect()
}

/// One candidate per line. Blank lines and `#` comments are skipped.
pub fn parse_candidates(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

pub fn read_candidates(path: &Path) -> Result<Vec<String>, CandidateError> {
    let text = fs::read_to_string(path).map_err(|source| CandidateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates = parse_candidates(&text);
    debug!(path = %path.display(), count = candidates.len(), "read candidates");
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_is_complete() {
        assert_eq!(DEFAULT_CANDIDATES.len(), 23);
        assert_eq!(default_candidates()[0], "name@sunet.se");
    }

    #[test]
    fn parse_skips_blanks_and_comments() {
        let text = "# staff\nname@sunet.se\n\n   first.last@hh.se  \n#ignored@x.se\n";
        assert_eq!(
            parse_candidates(text),
            vec!["name@sunet.se".to_string(), "first.last@hh.se".to_string()]
        );
    }

    #[test]
    fn read_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates.txt");
        let err = read_candidates(&path).unwrap_err();
        assert!(err.to_string().contains("candidates.txt"));
    }
}
