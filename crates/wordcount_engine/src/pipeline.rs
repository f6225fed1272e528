use std::io::{BufRead, BufWriter, Write};

use engine_logging::{engine_debug, engine_info};
use wordcount_core::{emit_counts, parse_record, record_key, CountRecord, GroupedAggregator};

use crate::{PassSummary, PipelineConfig, PipelineError};

/// Mapper pass: one `word<separator>1` line per token of every input line.
pub fn run_mapper<R, W>(
    input: R,
    output: W,
    config: &PipelineConfig,
) -> Result<PassSummary, PipelineError>
where
    R: BufRead,
    W: Write,
{
    let mut writer = BufWriter::new(output);
    let mut summary = PassSummary::default();

    for line in input.lines() {
        let line = line?;
        summary.lines_read += 1;
        for record in emit_counts(&line) {
            write_record(&mut writer, &record, config.separator)?;
            summary.records_written += 1;
        }
    }
    writer.flush()?;

    engine_info!(
        "map pass done lines={} records={}",
        summary.lines_read,
        summary.records_written
    );
    Ok(summary)
}

/// Reducer pass over `key<separator>count` lines grouped by key.
///
/// Emits one `key<separator>total` line per run of equal keys. The first
/// malformed line aborts the pass. Run boundaries are decided on the key alone,
/// so a malformed line that starts a new key still closes the run before it.
pub fn run_reducer<R, W>(
    input: R,
    output: W,
    config: &PipelineConfig,
) -> Result<PassSummary, PipelineError>
where
    R: BufRead,
    W: Write,
{
    let mut writer = BufWriter::new(output);
    let mut summary = PassSummary::default();
    let mut aggregator = GroupedAggregator::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        summary.lines_read += 1;
        if let Some(done) = aggregator.take_if_other_key(record_key(&line, config.separator)) {
            engine_debug!("run closed key={:?} total={}", done.key, done.count);
            write_record(&mut writer, &done, config.separator)?;
            summary.records_written += 1;
        }
        let record = parse_record(&line, config.separator, idx + 1)?;
        // The run was closed above if the key changed, so this only extends it.
        aggregator.push(record)?;
    }
    if let Some(done) = aggregator.finish() {
        write_record(&mut writer, &done, config.separator)?;
        summary.records_written += 1;
    }
    writer.flush()?;

    engine_info!(
        "reduce pass done lines={} records={}",
        summary.lines_read,
        summary.records_written
    );
    Ok(summary)
}

fn write_record<W: Write>(
    writer: &mut W,
    record: &CountRecord,
    separator: char,
) -> std::io::Result<()> {
    writeln!(writer, "{}", record.to_line(separator))
}
