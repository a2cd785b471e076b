use crate::config::RunnerConfig;
use crate::worker::{PoolSummary, WorkerFailure, WorkerReport};
use anyhow::{Context, Result};
use serde::Serialize;

/// Two-line usage text printed when no task list is given
pub const USAGE: &str = "dotasks task_list.txt\ndotasks procs:10 task_list.txt";

pub fn print_usage() {
    println!("{}", USAGE);
}

#[derive(Serialize)]
struct RunSummary<'a> {
    config: &'a RunnerConfig,
    commands_run: usize,
    workers: &'a [WorkerReport],
    failures: &'a [WorkerFailure],
}

/// Render a finished run as pretty JSON
pub fn render_summary(config: &RunnerConfig, summary: &PoolSummary) -> Result<String> {
    let run = RunSummary {
        config,
        commands_run: summary.commands_run(),
        workers: &summary.workers,
        failures: &summary.failures,
    };
    serde_json::to_string_pretty(&run).context("Failed to serialize run summary")
}

pub fn print_summary(config: &RunnerConfig, summary: &PoolSummary) -> Result<()> {
    println!("{}", render_summary(config, summary)?);
    Ok(())
}
