use std::fmt::Write;

use crate::types::ScanStats;

/// Renders the closing summary and histogram.
///
/// The two labeled lines always appear, even at zero; histogram rows
/// follow in ascending column order with the column value right-aligned
/// to a minimum width of 4.
pub fn format(stats: &ScanStats) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "blank lines: {}", stats.blanks);
    let _ = writeln!(
        s,
        "comments: line: {} block: {} total: {}",
        stats.line_comments,
        stats.block_comments,
        stats.comment_total()
    );
    for (cols, count) in &stats.lengths {
        let _ = writeln!(s, "{cols:>4} {count}");
    }
    s
}
