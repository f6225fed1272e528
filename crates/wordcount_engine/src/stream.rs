use std::io;

use chrono::Local;
use engine_logging::{engine_debug, engine_info, engine_trace};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use wordcount_core::count_batch;

use crate::{BatchReport, StreamError, StreamSummary, StreamingContext};

/// Receives every closed micro-batch, empty ones included.
pub trait BatchSink: Send {
    fn emit(&mut self, report: &BatchReport) -> io::Result<()>;
}

/// Connects to `ctx.address()` and counts words per micro-batch until the peer
/// hangs up or `cancel` fires. The pending batch is flushed on either exit.
pub async fn run_socket_stream(
    ctx: &StreamingContext,
    sink: &mut dyn BatchSink,
    cancel: CancellationToken,
) -> Result<StreamSummary, StreamError> {
    let addr = ctx.address();
    let socket = TcpStream::connect(&addr)
        .await
        .map_err(|source| StreamError::Connect {
            addr: addr.clone(),
            source,
        })?;
    engine_info!(
        "{} connected to {} batch_interval={:?}",
        ctx.app_name,
        addr,
        ctx.batch_interval
    );

    let mut lines = BufReader::new(socket).lines();
    let mut ticker = interval_at(Instant::now() + ctx.batch_interval, ctx.batch_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut pending: Vec<String> = Vec::new();
    let mut summary = StreamSummary::default();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                engine_info!("{} cancelled", ctx.app_name);
                break;
            }
            _ = ticker.tick() => {
                close_batch(&mut pending, &mut summary, sink)?;
            }
            line = lines.next_line() => match line? {
                Some(line) => {
                    engine_trace!("received {} bytes", line.len());
                    summary.lines_read += 1;
                    pending.push(line);
                }
                None => {
                    engine_info!("{} peer closed the connection", ctx.app_name);
                    break;
                }
            },
        }
    }

    if !pending.is_empty() {
        close_batch(&mut pending, &mut summary, sink)?;
    }
    Ok(summary)
}

fn close_batch(
    pending: &mut Vec<String>,
    summary: &mut StreamSummary,
    sink: &mut dyn BatchSink,
) -> Result<(), StreamError> {
    let counts = count_batch(pending.iter().map(String::as_str))?;
    summary.batches += 1;
    let report = BatchReport {
        seq: summary.batches,
        time: Local::now().naive_local(),
        counts,
    };
    engine_debug!(
        "batch {} closed lines={} distinct_words={}",
        report.seq,
        pending.len(),
        report.counts.len()
    );
    pending.clear();
    sink.emit(&report)?;
    Ok(())
}
