//! Items carried by the work queue

/// A single queue item: either a shell command or the signal telling one
/// worker to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Opaque shell command line, passed verbatim to the shell
    Command(String),
    /// Termination signal, exactly one per worker
    Terminate,
}

impl Task {
    pub fn command(line: impl Into<String>) -> Self {
        Task::Command(line.into())
    }

    pub fn is_terminate(&self) -> bool {
        matches!(self, Task::Terminate)
    }
}
