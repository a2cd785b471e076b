//! Task list loading

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Turn task list text into commands: one per line, trimmed, blank lines
/// skipped. No quoting, escaping or comment syntax is recognised.
pub fn parse_task_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Read a task list file and parse it into commands
pub async fn load_task_list(path: &Path) -> Result<Vec<String>> {
    debug!("Loading task list from: {}", path.display());

    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read task list file: {}", path.display()))?;

    // Invalid UTF-8 is replaced rather than rejecting the whole list
    let content = String::from_utf8_lossy(&bytes);
    let commands = parse_task_list(&content);
    info!(
        "Loaded {} commands from: {}",
        commands.len(),
        path.display()
    );

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_skips_blank_lines_and_trims() {
        let commands = parse_task_list("echo a\n\n  echo b  \n\t\n");
        assert_eq!(commands, vec!["echo a", "echo b"]);
    }

    #[test]
    fn test_parse_keeps_lines_verbatim() {
        let commands = parse_task_list("# not a comment\necho \"quoted; x\" && ls\r\n");
        assert_eq!(
            commands,
            vec!["# not a comment", "echo \"quoted; x\" && ls"]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_task_list("").is_empty());
        assert!(parse_task_list("\n   \n\n").is_empty());
    }

    #[tokio::test]
    async fn test_load_task_list_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "echo one\n\necho two\n").unwrap();

        let commands = load_task_list(temp_file.path()).await.unwrap();
        assert_eq!(commands, vec!["echo one", "echo two"]);
    }

    #[tokio::test]
    async fn test_load_task_list_with_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"echo one\ntouch caf\xe9.txt\necho three\n").unwrap();

        let commands = load_task_list(temp_file.path()).await.unwrap();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], "echo one");
        assert_eq!(commands[1], "touch caf\u{FFFD}.txt");
        assert_eq!(commands[2], "echo three");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let result = load_task_list(&path).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read task list file"));
    }
}
