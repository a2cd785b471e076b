pub mod cli;
pub mod config;
pub mod error;
pub mod queue;
pub mod worker;

// Public API
pub use config::{CompletionMode, RunnerConfig};
pub use error::DispatchError;
pub use queue::{create_shared_queue, load_task_list, parse_task_list, SharedWorkQueue, Task, WorkQueue};
pub use worker::{
    Completion, CommandRunner, PoolSummary, ShellRunner, Worker, WorkerPool, WorkerReport,
};
