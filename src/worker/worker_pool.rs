use super::execution::CommandRunner;
use super::worker::{Worker, WorkerReport};
use crate::config::{CompletionMode, RunnerConfig};
use crate::error::DispatchError;
use crate::queue::{create_shared_queue, SharedWorkQueue};
use serde::Serialize;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, warn};

/// Fixed-size pool of workers sharing one work queue
pub struct WorkerPool {
    size: usize,
    queue: SharedWorkQueue,
    runner: Arc<dyn CommandRunner>,
}

impl WorkerPool {
    /// Create a pool of `size` workers with a fresh, empty queue
    pub fn new(size: usize, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            size,
            queue: create_shared_queue(),
            runner,
        }
    }

    pub fn queue(&self) -> &SharedWorkQueue {
        &self.queue
    }

    /// Enqueue every command followed by one termination signal per worker.
    /// Returns the number of commands enqueued.
    pub async fn submit(&self, commands: Vec<String>) -> usize {
        let count = self.queue.put_commands(commands).await;
        self.queue.put_termination_signals(self.size).await;
        info!(
            "Queued {} commands for {} workers",
            count, self.size
        );
        count
    }

    /// Spawn every worker
    pub fn start(self) -> RunningPool {
        let handles = (0..self.size)
            .map(|i| {
                let worker = Worker::new(i, Arc::clone(&self.queue), Arc::clone(&self.runner));
                let name = worker.name().to_string();
                (name, tokio::spawn(worker.run()))
            })
            .collect();

        RunningPool {
            queue: self.queue,
            handles,
        }
    }

    /// Populate the queue, start the workers and wait for completion the way
    /// `config.completion` says.
    pub async fn dispatch(self, commands: Vec<String>, config: &RunnerConfig) -> Completion {
        self.submit(commands).await;
        let running = self.start();

        match config.completion {
            CompletionMode::Join => Completion::Joined(running.join().await),
            CompletionMode::Poll => {
                running.wait_until_drained(config.poll_interval()).await;
                Completion::Drained
            }
        }
    }
}

/// How a dispatch finished
#[derive(Debug)]
pub enum Completion {
    /// Every worker was awaited
    Joined(PoolSummary),
    /// The queue was observed empty; workers were not awaited
    Drained,
}

/// A worker whose task ended without stopping normally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerFailure {
    pub name: String,
    pub reason: String,
}

/// Outcome of a joined run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PoolSummary {
    pub workers: Vec<WorkerReport>,
    pub failures: Vec<WorkerFailure>,
}

impl PoolSummary {
    /// Total commands executed by workers that stopped normally
    pub fn commands_run(&self) -> usize {
        self.workers.iter().map(|w| w.commands_run).sum()
    }

    /// Turn crashed workers into an error
    pub fn into_result(self) -> Result<Self, DispatchError> {
        if self.failures.is_empty() {
            return Ok(self);
        }
        Err(DispatchError::WorkerCrashed {
            count: self.failures.len(),
            names: self
                .failures
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

/// Workers that have been started and not yet awaited
pub struct RunningPool {
    queue: SharedWorkQueue,
    handles: Vec<(String, JoinHandle<WorkerReport>)>,
}

impl RunningPool {
    /// Wait for every worker to stop. A crashed worker is recorded as a
    /// failure and does not affect the others.
    pub async fn join(self) -> PoolSummary {
        let mut summary = PoolSummary::default();

        for (name, handle) in self.handles {
            match handle.await {
                Ok(report) => summary.workers.push(report),
                Err(e) => {
                    let reason = failure_reason(e);
                    error!("{} crashed: {}", name, reason);
                    summary.failures.push(WorkerFailure { name, reason });
                }
            }
        }

        info!(
            "All workers finished: {} commands, {} failures",
            summary.commands_run(),
            summary.failures.len()
        );
        summary
    }

    /// Sleep `interval` between checks until the queue looks empty, then
    /// return without awaiting the workers.
    ///
    /// Emptiness is only a snapshot. Workers left running are detached and
    /// are dropped with the runtime, their child processes are not killed.
    /// Polling also stops once every worker task has ended, otherwise a
    /// crashed worker's unconsumed signal would keep the queue non-empty.
    pub async fn wait_until_drained(self, interval: Duration) {
        loop {
            tokio::time::sleep(interval).await;

            if self.queue.is_empty().await {
                debug!("Queue observed empty");
                break;
            }
            if self.handles.iter().all(|(_, h)| h.is_finished()) {
                warn!(
                    "All workers ended with {} items still queued",
                    self.queue.len().await
                );
                break;
            }
        }
    }
}

fn failure_reason(err: JoinError) -> String {
    if err.is_cancelled() {
        return "cancelled".to_string();
    }
    match err.try_into_panic() {
        Ok(payload) => panic_message(payload),
        Err(e) => e.to_string(),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("panicked: {}", msg)
    } else {
        "panicked".to_string()
    }
}
