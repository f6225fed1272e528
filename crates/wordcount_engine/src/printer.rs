use std::io::{self, Write};

use crate::{BatchReport, BatchSink};

const RULE: &str = "-------------------------------------------";

/// Renders one batch as a ruled `Time:` header, at most `limit` records and a
/// trailing blank line. A `...` line marks records left out.
pub fn format_batch(report: &BatchReport, limit: usize) -> String {
    let mut out = format!(
        "{RULE}\nTime: {}\n{RULE}\n",
        report.time.format("%Y-%m-%d %H:%M:%S")
    );
    for record in report.counts.iter().take(limit) {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    if report.counts.len() > limit {
        out.push_str("...\n");
    }
    out.push('\n');
    out
}

/// Prints batches to any writer, flushing after each one.
pub struct BatchPrinter<W> {
    out: W,
    limit: usize,
}

impl<W: Write> BatchPrinter<W> {
    pub fn new(out: W, limit: usize) -> Self {
        Self { out, limit }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> BatchSink for BatchPrinter<W> {
    fn emit(&mut self, report: &BatchReport) -> io::Result<()> {
        self.out
            .write_all(format_batch(report, self.limit).as_bytes())?;
        self.out.flush()
    }
}
