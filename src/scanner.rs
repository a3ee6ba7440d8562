use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use memchr::memmem;

use crate::types::{ScanOptions, ScanStats};

/// Marker that introduces a line comment.
const LINE_COMMENT: &str = "--";
/// Markers that open and close a (nestable) block comment.
const BLOCK_OPEN: &[u8] = b"{-";
const BLOCK_CLOSE: &[u8] = b"-}";

/// Widest acceptable line; anything longer gets an interleaved diagnostic.
pub const MAX_COLS: usize = 80;
/// How much of an overlong line the diagnostic shows.
const DIAG_PREFIX_CHARS: usize = 120;

/// Scans one file, updating the run statistics in place and writing
/// overlong-line diagnostics to `out` as they are found.
///
/// The file is read whole as UTF-8 text; lines keep their terminators so
/// that trailing-newline bytes count toward line length. Block-comment
/// nesting state lives in `stats` and is not reset between files.
///
/// # Errors
/// Returns an error if the file cannot be opened or read, if its bytes
/// are not valid UTF-8, or if writing a diagnostic fails. Any such error
/// is fatal for the whole run.
pub fn scan_file<W: Write>(
    path: &Path,
    opts: ScanOptions,
    stats: &mut ScanStats,
    out: &mut W,
) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read file: {}", path.display()))?;
    stats.files += 1;
    for (lineno, line) in text.split_inclusive('\n').enumerate() {
        scan_line(path, lineno, line, opts, stats, out)
            .with_context(|| format!("write diagnostic for {}", path.display()))?;
    }
    Ok(())
}

/// Classifies a single raw line (terminator included) at its zero-based
/// index, following the original tool's order exactly: line-comment
/// tally, nesting update, block tally, blank, then length histogram.
fn scan_line<W: Write>(
    path: &Path,
    lineno: usize,
    line: &str,
    opts: ScanOptions,
    stats: &mut ScanStats,
    out: &mut W,
) -> io::Result<()> {
    let stripped = line.trim();

    if stripped.starts_with(LINE_COMMENT) {
        stats.line_comments += 1;
        if opts.skip_comments {
            return Ok(());
        }
    }

    // Naive textual marker counts: markers inside string literals or line
    // comments still move the nesting level. Clamped at zero.
    let opens = count_markers(line, BLOCK_OPEN);
    let closes = count_markers(line, BLOCK_CLOSE);
    stats.nesting = (stats.nesting + opens).saturating_sub(closes);
    if stats.nesting > 0 {
        stats.block_comments += 1;
        if opts.skip_comments {
            return Ok(());
        }
    }

    if stripped.is_empty() {
        stats.blanks += 1;
        return Ok(());
    }

    // One trailing newline is excluded from the count, nothing else.
    let cols = line.chars().count().saturating_sub(1);
    *stats.lengths.entry(cols).or_insert(0) += 1;
    if cols > MAX_COLS {
        writeln!(out, "{}:{}", path.display(), lineno)?;
        let prefix: String = line.chars().take(DIAG_PREFIX_CHARS).collect();
        writeln!(out, "{prefix}")?;
    }
    Ok(())
}

fn count_markers(line: &str, marker: &[u8]) -> usize {
    memmem::find_iter(line.as_bytes(), marker).count()
}
