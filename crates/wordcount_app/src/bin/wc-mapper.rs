use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use wordcount_app::platform::cli::{finish, LogArgs, RecordArgs};
use wordcount_engine::run_mapper;

/// Reads text on stdin and writes one `word<TAB>1` line per word.
#[derive(Debug, Parser)]
#[command(name = "wc-mapper", version)]
struct Args {
    #[command(flatten)]
    record: RecordArgs,
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.log.init_logging();
    finish("wc-mapper", run(&args))
}

fn run(args: &Args) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_mapper(stdin, stdout, &args.record.pipeline_config()).context("map pass failed")?;
    Ok(())
}
