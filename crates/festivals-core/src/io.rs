//! Loading an [`Agenda`] from a file of festival records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::agenda::Agenda;
use crate::error::{Error, ParseError, Result};
use crate::parse::parse_line;

/// What to do with a line that fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Log the line, remember it in [`LoadReport::skipped`] and keep going.
    #[default]
    Skip,
    /// Stop at the first bad line.
    Abort,
}

/// Outcome of a load.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub agenda: Agenda,
    /// Number of festivals added to the agenda.
    pub added: usize,
    /// 1-based line numbers of the lines that were skipped, with the reason.
    pub skipped: Vec<(usize, ParseError)>,
}

/// Read records line by line into a new agenda.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn load_from_reader(reader: impl BufRead, policy: LoadPolicy) -> Result<LoadReport> {
    let mut report = LoadReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_line(trimmed) {
            Ok(festival) => {
                report.agenda.add(festival);
                report.added += 1;
            }
            Err(e) if policy == LoadPolicy::Skip => {
                log::warn!("Skipping line {}: {}", line_no, e);
                report.skipped.push((line_no, e));
            }
            Err(e) => {
                return Err(Error::Parse {
                    line: line_no,
                    source: e,
                });
            }
        }
    }

    log::info!(
        "Loaded {} festivals ({} lines skipped)",
        report.added,
        report.skipped.len()
    );

    Ok(report)
}

/// Read records from the file at `path`.
pub fn load_from_path(path: impl AsRef<Path>, policy: LoadPolicy) -> Result<LoadReport> {
    let path = path.as_ref();
    log::debug!("Loading festivals from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file), policy)
}
