use std::collections::BTreeMap;

/// Per-line classification switches for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// When set, a line recognized as a comment is excluded from the
    /// blank/length classification that follows.
    pub skip_comments: bool,
}

/// Aggregate counters for one run, owned by the scan loop.
///
/// The block-comment nesting depth lives here on purpose: it is carried
/// across files for the whole run, never reset per file.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Lines whose trimmed content starts with the line-comment marker.
    pub line_comments: usize,
    /// Lines inside a block comment after the nesting update.
    pub block_comments: usize,
    /// Lines that are empty after trimming whitespace.
    pub blanks: usize,
    /// Column count -> number of lines observed at that exact count.
    /// BTreeMap keeps the histogram in ascending key order for printing.
    pub lengths: BTreeMap<usize, usize>,
    /// Current block-comment nesting depth, clamped at 0.
    pub nesting: usize,
    /// Files actually scanned (ignored paths excluded). Verbose logging
    /// only; never part of the report.
    pub files: usize,
}

impl ScanStats {
    pub fn comment_total(&self) -> usize {
        self.line_comments + self.block_comments
    }
}
