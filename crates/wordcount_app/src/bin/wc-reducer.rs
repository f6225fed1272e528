use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use wordcount_app::platform::cli::{finish, LogArgs, RecordArgs};
use wordcount_engine::run_reducer;

/// Sums `key<TAB>count` lines grouped by key and writes `key<TAB>total`.
///
/// Input must already be sorted or otherwise grouped by key, e.g. via
/// `wc-mapper < in.txt | sort | wc-reducer`.
#[derive(Debug, Parser)]
#[command(name = "wc-reducer", version)]
struct Args {
    #[command(flatten)]
    record: RecordArgs,
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.log.init_logging();
    finish("wc-reducer", run(&args))
}

fn run(args: &Args) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_reducer(stdin, stdout, &args.record.pipeline_config()).context("reduce pass failed")?;
    Ok(())
}
