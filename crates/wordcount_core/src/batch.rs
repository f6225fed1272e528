use crate::{aggregate_grouped, emit_counts, CountRecord, RecordError};

/// Counts the words of one micro-batch.
///
/// Nothing upstream orders a live stream, so the records are sorted by key
/// before they reach the run aggregator. The result holds one record per
/// distinct word, in key order.
pub fn count_batch<'a, I>(lines: I) -> Result<Vec<CountRecord>, RecordError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records: Vec<CountRecord> = lines.into_iter().flat_map(emit_counts).collect();
    records.sort_unstable_by(|a, b| a.key.cmp(&b.key));
    aggregate_grouped(records)
}
