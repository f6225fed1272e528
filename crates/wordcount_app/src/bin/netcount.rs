use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_info, engine_warn};
use tokio_util::sync::CancellationToken;
use wordcount_app::platform::cli::{finish, LogArgs};
use wordcount_engine::{run_socket_stream, BatchPrinter, StreamingContext};

/// Counts words per one-second batch of lines read from `localhost:<port>`.
///
/// Start a line source first, e.g. `nc -l 9999`, then run `netcount 9999`
/// and type into the `nc` terminal.
#[derive(Debug, Parser)]
#[command(name = "netcount", version)]
struct Args {
    /// TCP port of the text source on localhost.
    port: u16,
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            eprintln!("Must specify port to listen to.");
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(err) => err.exit(),
    };
    args.log.init_logging();
    finish("netcount", run(StreamingContext::new(args.port)))
}

fn run(ctx: StreamingContext) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(async {
        let cancel = CancellationToken::new();
        let on_signal = cancel.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    engine_info!("interrupt received, stopping");
                    on_signal.cancel();
                }
                Err(err) => engine_warn!("cannot listen for interrupt: {}", err),
            }
        });

        let mut printer = BatchPrinter::new(io::stdout(), ctx.print_limit);
        let summary = run_socket_stream(&ctx, &mut printer, cancel)
            .await
            .with_context(|| format!("{} job failed", ctx.app_name))?;
        engine_info!(
            "{} finished batches={} lines={}",
            ctx.app_name,
            summary.batches,
            summary.lines_read
        );
        Ok::<(), anyhow::Error>(())
    })
}
