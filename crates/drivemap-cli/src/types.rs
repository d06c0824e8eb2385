use std::path::PathBuf;

use drivemap_core::{DEFAULT_FIELD_WIDTH, DEFAULT_MAPPING_FILE, InvalidPatternPolicy};

/// Where the candidate identifiers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    Inline(Vec<String>),
    File(PathBuf),
    Builtin,
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub mapping_path: PathBuf,
    pub candidates: CandidateSource,
    pub width: usize,
    pub policy: InvalidPatternPolicy,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            mapping_path: PathBuf::from(DEFAULT_MAPPING_FILE),
            candidates: CandidateSource::Builtin,
            width: DEFAULT_FIELD_WIDTH,
            policy: InvalidPatternPolicy::Fail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternsOptions {
    pub mapping_path: PathBuf,
    pub policy: InvalidPatternPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    pub candidates: usize,
    pub matched: usize,
    pub entries: usize,
    pub skipped: usize,
}
