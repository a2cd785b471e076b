//! External command execution

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs one command on behalf of a worker, to completion.
///
/// Implementations must not report the command's outcome: a failing command
/// is indistinguishable from a successful one to the caller.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, worker: &str, command: &str);
}

/// Runs commands through `<shell> -c <command>` with inherited stdio
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, worker: &str, command: &str) {
        // Exit status, spawn errors and signals are all swallowed
        let _ = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;
        debug!(worker, command, "command returned");
    }
}
