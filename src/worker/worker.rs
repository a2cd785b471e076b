//! A single queue-draining worker

use super::execution::CommandRunner;
use crate::queue::{SharedWorkQueue, Task};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Worker lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running,
    Stopped,
}

/// What a worker did before it stopped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    pub name: String,
    pub commands_run: usize,
    pub elapsed_ms: u64,
}

/// Pulls tasks from the shared queue and runs them one at a time until it
/// receives a termination signal.
pub struct Worker {
    name: String,
    queue: SharedWorkQueue,
    runner: Arc<dyn CommandRunner>,
    state: WorkerState,
}

impl Worker {
    pub fn new(index: usize, queue: SharedWorkQueue, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            name: worker_name(index),
            queue,
            runner,
            state: WorkerState::Running,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the worker loop to completion
    pub async fn run(mut self) -> WorkerReport {
        let started = Instant::now();
        let mut commands_run = 0;
        debug!("{} started", self.name);

        while self.state == WorkerState::Running {
            match self.queue.get().await {
                Task::Terminate => {
                    self.state = WorkerState::Stopped;
                }
                Task::Command(command) => {
                    emit_marker(&self.name, &command);
                    self.runner.run(&self.name, &command).await;
                    commands_run += 1;
                }
            }
        }

        debug!("{} stopped after {} commands", self.name, commands_run);
        WorkerReport {
            name: self.name,
            commands_run,
            elapsed_ms: started.elapsed().as_millis() as u64,
        }
    }
}

/// Write the `<worker> <command>` dispatch line. A closed or broken stdout
/// is logged and otherwise ignored; the command still runs.
fn emit_marker(worker: &str, command: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{} {}", worker, command) {
        warn!(worker, "failed to write dispatch line: {}", e);
    }
}

/// Name of the worker with the given index
pub fn worker_name(index: usize) -> String {
    format!("worker-{}", index)
}
