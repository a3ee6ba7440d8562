use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::types::{ScanOptions, ScanStats};
use crate::{report, scanner};

use super::Args;

pub fn run_with_args(args: &Args) -> Result<()> {
    // Fixed for the whole run; matching is against the path exactly as
    // supplied, no normalization.
    let ignored: HashSet<&PathBuf> = args.ignore.iter().collect();

    let opts = ScanOptions {
        skip_comments: args.skip_comments,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut stats = ScanStats::default();

    // Strictly sequential, in argument order; the first failure aborts
    // the run with no summary printed.
    for path in &args.paths {
        if ignored.contains(path) {
            if args.verbose > 0 {
                eprintln!("Ignoring: {}", path.display());
            }
            continue;
        }
        if args.verbose > 0 {
            eprintln!("Scanning: {}", path.display());
        }
        scanner::scan_file(path, opts, &mut stats, &mut out)?;
    }

    if args.verbose > 1 {
        eprintln!(
            "Totals: files={}, blanks={}, line_comments={}, block_comments={}",
            stats.files, stats.blanks, stats.line_comments, stats.block_comments
        );
    }

    out.write_all(report::format(&stats).as_bytes())?;
    Ok(())
}
