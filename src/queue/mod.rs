//! Work queue shared between the coordinator and the worker pool
//!
//! This module provides:
//! - The `Task` item type (command or termination signal)
//! - A concurrency-safe queue delivering each item to exactly one consumer
//! - Task list loading from plain text files

pub mod loader;
pub mod task;
pub mod work_queue;

pub use loader::{load_task_list, parse_task_list};
pub use task::Task;
pub use work_queue::WorkQueue;

use std::sync::Arc;

/// Shared work queue instance
pub type SharedWorkQueue = Arc<WorkQueue>;

/// Create a new shared work queue
pub fn create_shared_queue() -> SharedWorkQueue {
    Arc::new(WorkQueue::new())
}
