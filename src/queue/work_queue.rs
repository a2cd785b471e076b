//! Shared multi-producer, multi-consumer work queue

use super::Task;
use std::collections::VecDeque;
use tokio::sync::{Mutex, Notify};
use tracing::{debug, trace};

/// Concurrency-safe FIFO of tasks shared by the coordinator and all workers.
///
/// Every item is handed to exactly one consumer. The queue itself does the
/// scheduling: whichever worker pulls next gets the next command.
#[derive(Debug, Default)]
pub struct WorkQueue {
    items: Mutex<VecDeque<Task>>,
    available: Notify,
}

impl WorkQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Notify::new(),
        }
    }

    /// Append a task and wake one waiting consumer
    pub async fn put(&self, task: Task) {
        trace!("Enqueuing task: {:?}", task);
        self.items.lock().await.push_back(task);
        self.available.notify_one();
    }

    /// Append each command in order, returning how many were enqueued
    pub async fn put_commands<I>(&self, commands: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut count = 0;
        {
            let mut items = self.items.lock().await;
            for command in commands {
                items.push_back(Task::Command(command));
                count += 1;
            }
        }
        if count > 0 {
            self.available.notify_one();
        }
        debug!("Enqueued {} commands", count);
        count
    }

    /// Append `count` termination signals
    pub async fn put_termination_signals(&self, count: usize) {
        {
            let mut items = self.items.lock().await;
            items.extend(std::iter::repeat(Task::Terminate).take(count));
        }
        if count > 0 {
            self.available.notify_one();
        }
        debug!("Enqueued {} termination signals", count);
    }

    /// Remove and return the next task, waiting until one is available.
    ///
    /// This is the only point where a worker suspends.
    pub async fn get(&self) -> Task {
        loop {
            let notified = self.available.notified();
            tokio::pin!(notified);
            // Register interest before looking, so a put between the check
            // and the await still wakes us.
            notified.as_mut().enable();

            {
                let mut items = self.items.lock().await;
                if let Some(task) = items.pop_front() {
                    if !items.is_empty() {
                        // Pass the wakeup along for the remaining items
                        self.available.notify_one();
                    }
                    return task;
                }
            }

            notified.await;
        }
    }

    /// Number of queued items at this instant. Racy under concurrent use.
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Whether the queue is empty at this instant. Racy under concurrent use:
    /// a worker may still be executing a command it already pulled.
    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}
