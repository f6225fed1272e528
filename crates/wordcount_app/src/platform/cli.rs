use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use engine_logging::{engine_error, level_for_verbosity};
use wordcount_core::DEFAULT_SEPARATOR;
use wordcount_engine::PipelineConfig;

use crate::platform::logging::{self, LogDestination};

/// Logging flags shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append log lines to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    pub fn init_logging(&self) {
        logging::initialize(
            level_for_verbosity(self.verbose),
            LogDestination::from_log_file(self.log_file.as_deref()),
        );
    }
}

/// Record format flags shared by the mapper and the reducer.
#[derive(Debug, Clone, Args)]
pub struct RecordArgs {
    /// Character between key and count.
    #[arg(short, long, default_value_t = DEFAULT_SEPARATOR, hide_default_value = true)]
    pub separator: char,
}

impl RecordArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            separator: self.separator,
        }
    }
}

/// Turns the outcome of a run into the process exit status, reporting failures.
pub fn finish(program: &str, result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("{program} failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
