use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Worker count used when no `procs:<N>` argument is given
pub const DEFAULT_PROCS: usize = 6;

/// How the coordinator decides that a run is finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompletionMode {
    /// Wait for every worker to stop
    #[default]
    Join,
    /// Sleep and re-check until the queue looks empty. Racy: workers may
    /// still be running their last command when this returns.
    Poll,
}

// Runner settings assembled from the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_procs")]
    pub procs: usize,
    #[serde(default = "default_shell")]
    pub shell: String,
    #[serde(default)]
    pub completion: CompletionMode,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            procs: default_procs(),
            shell: default_shell(),
            completion: CompletionMode::default(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl RunnerConfig {
    /// Set the worker count, rejecting zero
    pub fn with_procs(mut self, procs: usize) -> Result<Self, DispatchError> {
        if procs == 0 {
            return Err(DispatchError::InvalidWorkerCount(procs.to_string()));
        }
        self.procs = procs;
        Ok(self)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

fn default_procs() -> usize {
    DEFAULT_PROCS
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_poll_interval_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runner_config() {
        let config = RunnerConfig::default();
        assert_eq!(config.procs, 6);
        assert_eq!(config.shell, "sh");
        assert_eq!(config.completion, CompletionMode::Join);
        assert_eq!(config.poll_interval(), Duration::from_secs(10));
    }

    #[test]
    fn test_with_procs_rejects_zero() {
        let result = RunnerConfig::default().with_procs(0);
        assert!(matches!(result, Err(DispatchError::InvalidWorkerCount(_))));

        let config = RunnerConfig::default().with_procs(3).unwrap();
        assert_eq!(config.procs, 3);
    }

    #[test]
    fn test_runner_config_partial_deserialization() {
        let config: RunnerConfig = serde_json::from_str(r#"{"procs": 2}"#).unwrap();
        assert_eq!(config.procs, 2);
        assert_eq!(config.shell, "sh");
        assert_eq!(config.completion, CompletionMode::Join);
    }

    #[test]
    fn test_completion_mode_serialization() {
        let json = serde_json::to_string(&CompletionMode::Poll).unwrap();
        assert_eq!(json, r#""poll""#);
    }
}
