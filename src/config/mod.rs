pub mod runner_config;

pub use runner_config::{CompletionMode, RunnerConfig, DEFAULT_PROCS};
