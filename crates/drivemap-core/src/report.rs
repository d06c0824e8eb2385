//! Console rendering of match results.

use std::io::{self, Write};

use crate::matcher::MatchReport;

/// Width of the right-justified candidate column.
pub const DEFAULT_FIELD_WIDTH: usize = 35;

/// `candidate` right-justified to `width` characters, then `": "` and the label.
///
/// Candidates longer than `width` are printed in full.
pub fn format_line(candidate: &str, label: &str, width: usize) -> String {
    format!("{candidate:>width$}: {label}")
}

/// Write one line per matched candidate. Unmatched candidates produce nothing.
pub fn write_report<W: Write>(writer: &mut W, report: &MatchReport, width: usize) -> io::Result<()> {
    for (candidate, label) in report.matched() {
        writeln!(writer, "{}", format_line(candidate, label, width))?;
    }
    Ok(())
}

pub fn render_report(report: &MatchReport, width: usize) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buffer, report, width);
    String::from_utf8_lossy(&buffer).into_owned()
}
