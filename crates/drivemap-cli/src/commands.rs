use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use drivemap_core::{
    default_candidates, load_mapping, match_candidates, read_candidates, write_report,
};

use crate::summary::pattern_table;
use crate::types::{CandidateSource, MatchOptions, MatchSummary, PatternsOptions};

/// Match candidates against the mapping and write one line per hit to `out`.
///
/// The mapping is loaded before any candidate is read, so a broken mapping
/// file aborts the run with nothing written.
pub fn run_match<W: Write>(options: &MatchOptions, out: &mut W) -> Result<MatchSummary> {
    let span = info_span!("match", mapping = %options.mapping_path.display());
    let _guard = span.enter();

    let mapping = load_mapping(&options.mapping_path, options.policy).context("load mapping")?;
    let candidates = resolve_candidates(&options.candidates)?;

    let report = match_candidates(&mapping, &candidates);
    if report.is_empty() {
        warn!("no candidates to check");
    }
    write_report(out, &report, options.width).context("write match lines")?;
    out.flush().context("flush output")?;

    let summary = MatchSummary {
        candidates: report.len(),
        matched: report.matched_count(),
        entries: mapping.len(),
        skipped: mapping.skipped().len(),
    };
    info!(
        candidates = summary.candidates,
        matched = summary.matched,
        "match run complete"
    );
    Ok(summary)
}

/// Load and compile the mapping, then list its entries as a table.
pub fn run_patterns<W: Write>(options: &PatternsOptions, out: &mut W) -> Result<()> {
    let mapping = load_mapping(&options.mapping_path, options.policy).context("load mapping")?;
    let table = pattern_table(&mapping);
    writeln!(out, "{table}").context("write pattern table")?;
    out.flush().context("flush output")?;
    Ok(())
}

fn resolve_candidates(source: &CandidateSource) -> Result<Vec<String>> {
    match source {
        CandidateSource::Inline(candidates) => Ok(candidates.clone()),
        CandidateSource::File(path) => read_candidates(path).context("load candidates"),
        CandidateSource::Builtin => Ok(default_candidates()),
    }
}
