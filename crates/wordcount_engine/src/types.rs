use std::io;

use chrono::NaiveDateTime;
use thiserror::Error;
use wordcount_core::{CountRecord, RecordError};

/// Line and record totals of one mapper or reducer pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    pub lines_read: u64,
    pub records_written: u64,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Word counts of one closed micro-batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// 1-based batch number.
    pub seq: u64,
    /// Local wall-clock time at which the batch closed.
    pub time: NaiveDateTime,
    pub counts: Vec<CountRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    pub batches: u64,
    pub lines_read: u64,
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("failed to connect to {addr}: {source}")]
    Connect { addr: String, source: io::Error },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}
