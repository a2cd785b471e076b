use anyhow::{Context, Result};
use clap::Parser;
use dotasks::cli::{parse_invocation, print_summary, print_usage, Cli};
use dotasks::{load_task_list, Completion, ShellRunner, WorkerPool};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments first to get debug flag
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries worker dispatch lines
    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let invocation = parse_invocation(&cli.args)?;
    let Some(task_list) = invocation.task_list else {
        print_usage();
        return Ok(());
    };

    let config = cli.runner_config(invocation.procs)?;
    let commands = load_task_list(&task_list).await?;
    info!(
        "Running {} commands from {} on {} workers",
        commands.len(),
        task_list.display(),
        config.procs
    );

    let runner = Arc::new(ShellRunner::new(config.shell.clone()));
    let pool = WorkerPool::new(config.procs, runner);

    match pool.dispatch(commands, &config).await {
        Completion::Joined(summary) => {
            if cli.summary {
                print_summary(&config, &summary)?;
            }
            summary.into_result().context("Some workers did not finish")?;
        }
        Completion::Drained => {
            if cli.summary {
                warn!("No summary is collected with --wait poll");
            }
        }
    }

    Ok(())
}
