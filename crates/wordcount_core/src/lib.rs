//! Wordcount core: pure tokenizing and grouping logic shared by every pipeline.
mod aggregate;
mod batch;
mod record;
mod tokenize;

pub use aggregate::{aggregate_grouped, group_sums, GroupSums, GroupedAggregator};
pub use batch::count_batch;
pub use record::{parse_record, record_key, CountRecord, RecordError, DEFAULT_SEPARATOR};
pub use tokenize::{emit_counts, tokens};
