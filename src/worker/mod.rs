//! Worker pool: named workers draining the shared work queue

pub mod execution;
pub mod worker;
pub mod worker_pool;

pub use execution::{CommandRunner, ShellRunner};
pub use worker::{worker_name, Worker, WorkerReport, WorkerState};
pub use worker_pool::{Completion, PoolSummary, RunningPool, WorkerFailure, WorkerPool};
