use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("invalid worker count '{0}': expected a positive integer")]
    InvalidWorkerCount(String),
    #[error("{count} worker(s) crashed: {names}")]
    WorkerCrashed { count: usize, names: String },
}
