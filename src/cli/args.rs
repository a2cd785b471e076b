use crate::config::{CompletionMode, RunnerConfig};
use crate::error::DispatchError;
use clap::Parser;
use std::path::PathBuf;

const PROCS_PREFIX: &str = "procs:";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task list file, optionally preceded by procs:<N>
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,

    /// Shell used to run each command as `<shell> -c <command>`
    #[arg(long, default_value = "sh")]
    pub shell: String,

    /// How to detect that all commands have finished
    #[arg(long, value_enum, default_value_t = CompletionMode::Join)]
    pub wait: CompletionMode,

    /// Seconds between queue checks with --wait poll
    #[arg(long, default_value_t = 10)]
    pub poll_interval: u64,

    /// Print a JSON summary of the run when it finishes
    #[arg(long)]
    pub summary: bool,

    /// Enable debug logging for internal details
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Build the runner configuration, applying a `procs:<N>` override
    pub fn runner_config(&self, procs: Option<usize>) -> Result<RunnerConfig, DispatchError> {
        let config = RunnerConfig {
            shell: self.shell.clone(),
            completion: self.wait,
            poll_interval_secs: self.poll_interval,
            ..RunnerConfig::default()
        };

        match procs {
            Some(procs) => config.with_procs(procs),
            None => Ok(config),
        }
    }
}

/// Positional arguments after interpretation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub procs: Option<usize>,
    pub task_list: Option<PathBuf>,
}

/// Interpret positional arguments: `procs:<N>` sets the worker count, any
/// other argument is the task list path (the last one wins).
pub fn parse_invocation(args: &[String]) -> Result<Invocation, DispatchError> {
    let mut invocation = Invocation::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix(PROCS_PREFIX) {
            let procs = value
                .trim()
                .parse::<usize>()
                .map_err(|_| DispatchError::InvalidWorkerCount(value.to_string()))?;
            if procs == 0 {
                return Err(DispatchError::InvalidWorkerCount(value.to_string()));
            }
            invocation.procs = Some(procs);
        } else {
            invocation.task_list = Some(PathBuf::from(arg));
        }
    }

    Ok(invocation)
}
