//! Mapping file loading.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::mapping::{InvalidPatternPolicy, Mapping};

/// File name the original harness read from the working directory.
pub const DEFAULT_MAPPING_FILE: &str = "mappingfile.json";

/// Read and compile the mapping file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read, is not a JSON object of scalar
/// labels, or (under [`InvalidPatternPolicy::Fail`]) holds a key that does
/// not compile. The error always names `path`.
pub fn load_mapping(path: &Path, policy: InvalidPatternPolicy) -> Result<Mapping> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read mapping file");

    let mapping =
        Mapping::from_json_str(&text, policy).map_err(|source| LoadError::Mapping {
            path: path.to_path_buf(),
            source,
        })?;

    info!(
        path = %path.display(),
        entries = mapping.len(),
        skipped = mapping.skipped().len(),
        "loaded mapping"
    );
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::MappingError;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_entries_in_file_order() {
        let file = write_temp(r#"{"/@hh\\.se$/": "hh", "/@sunet\\.se$/": "sunet"}"#);
        let mapping = load_mapping(file.path(), InvalidPatternPolicy::Fail).unwrap();
        let patterns: Vec<_> = mapping.iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(patterns, vec![r"/@hh\.se$/", r"/@sunet\.se$/"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_MAPPING_FILE);
        let err = load_mapping(&path, InvalidPatternPolicy::Fail).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("mappingfile.json"));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let file = write_temp("{not json");
        let err = load_mapping(file.path(), InvalidPatternPolicy::Fail).unwrap_err();
        let LoadError::Mapping { path, source } = err else {
            panic!("expected a mapping error");
        };
        assert_eq!(path, file.path());
        assert!(matches!(source, MappingError::Json(_)));
    }
}
