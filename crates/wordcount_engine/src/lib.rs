//! Wordcount engine: stdin/stdout passes and the socket micro-batch job.
mod config;
mod pipeline;
mod printer;
mod stream;
mod types;

pub use config::{PipelineConfig, StreamingContext};
pub use pipeline::{run_mapper, run_reducer};
pub use printer::{format_batch, BatchPrinter};
pub use stream::{run_socket_stream, BatchSink};
pub use types::{BatchReport, PassSummary, PipelineError, StreamError, StreamSummary};
