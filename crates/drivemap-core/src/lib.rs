//! Regex-keyed node mapping.
//!
//! A mapping file is a JSON object whose keys are regular expressions and
//! whose values are node labels. Candidates (user identifiers) are checked
//! against the keys in file order and the first hit decides the label.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use drivemap_core::{InvalidPatternPolicy, load_mapping, match_candidates, write_report};
//!
//! let mapping = load_mapping(Path::new("mappingfile.json"), InvalidPatternPolicy::Fail)?;
//! let report = match_candidates(&mapping, ["name@sunet.se"]);
//! write_report(&mut std::io::stdout(), &report, drivemap_core::DEFAULT_FIELD_WIDTH)?;
//! ```

#![deny(unsafe_code)]

mod candidates;
mod error;
mod loader;
mod mapping;
mod matcher;
mod pattern;
mod report;

// === Error Types ===
pub use error::{CandidateError, LoadError, MappingError, PatternError, Result};

// === Mapping ===
pub use loader::{DEFAULT_MAPPING_FILE, load_mapping};
pub use mapping::{InvalidPatternPolicy, Mapping, MappingEntry};
pub use pattern::Pattern;

// === Matching ===
pub use matcher::{CandidateMatch, MatchOutcome, MatchReport, match_candidates};
pub use report::{DEFAULT_FIELD_WIDTH, format_line, render_report, write_report};

// === Candidates ===
pub use candidates::{DEFAULT_CANDIDATES, default_candidates, parse_candidates, read_candidates};
