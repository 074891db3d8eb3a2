use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

use super::ClipboardSink;
use crate::models::error::CatalogError;

/// Clipboard writes that take longer than this are abandoned
const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(3);

/// Copy utilities to try, in order, for the current platform
#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Clipboard backed by the platform's copy utility (pbcopy, wl-copy, xclip, ...)
pub struct SystemClipboard {
    candidates: Vec<(String, Vec<String>)>,
    timeout: Duration,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            candidates: CLIPBOARD_TOOLS
                .iter()
                .map(|(program, args)| {
                    (
                        program.to_string(),
                        args.iter().map(|a| a.to_string()).collect(),
                    )
                })
                .collect(),
            timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }

    /// Use a specific program instead of probing the platform defaults
    pub fn with_program(program: &str, args: &[&str]) -> Self {
        Self {
            candidates: vec![(
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            )],
            timeout: DEFAULT_WRITE_TIMEOUT,
        }
    }

    /// Abandon (and kill) a utility that has not finished after `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn write_with(program: &str, args: &[String], text: &str) -> Result<(), CatalogError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CatalogError::Clipboard(format!("{}: {}", program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| CatalogError::Clipboard(format!("{}: {}", program, e)))?;
            // Dropping stdin closes the pipe so the tool can finish
        }

        let status = child
            .wait()
            .await
            .map_err(|e| CatalogError::Clipboard(format!("{}: {}", program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(CatalogError::Clipboard(format!(
                "{} exited with code {}",
                program,
                status.code().unwrap_or(-1)
            )))
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CatalogError> {
        let mut last_error = CatalogError::Clipboard("no clipboard utility configured".to_string());

        for (program, args) in &self.candidates {
            match timeout(self.timeout, Self::write_with(program, args, text)).await {
                Ok(Ok(())) => {
                    tracing::debug!("Copied {} bytes via {}", text.len(), program);
                    return Ok(());
                }
                Ok(Err(e)) => {
                    tracing::debug!("Clipboard utility {} failed: {}", program, e);
                    last_error = e;
                }
                Err(_) => {
                    last_error = CatalogError::Clipboard(format!(
                        "{} timed out after {}ms",
                        program,
                        self.timeout.as_millis()
                    ));
                }
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_candidates_non_empty() {
        assert!(!SystemClipboard::new().candidates.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_write_through_cat() {
        let clipboard = SystemClipboard::with_program("cat", &[]);
        assert!(clipboard.write_text("docker ps").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_is_an_error() {
        let clipboard = SystemClipboard::with_program("false", &[]);
        let err = clipboard.write_text("docker ps").await.unwrap_err();
        assert!(matches!(err, CatalogError::Clipboard(_)));
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_hung_program_is_killed_after_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let pid_file = dir.path().join("pid");
        let script = format!("echo $$ > {}; exec sleep 30", pid_file.display());

        let clipboard = SystemClipboard::with_program("sh", &["-c", script.as_str()])
            .with_timeout(Duration::from_millis(300));
        let err = clipboard.write_text("docker ps").await.unwrap_err();
        assert!(err.to_string().contains("timed out"));

        let pid = std::fs::read_to_string(&pid_file).unwrap();
        let stat_path = format!("/proc/{}/stat", pid.trim());
        let mut gone = false;
        for _ in 0..50 {
            match std::fs::read_to_string(&stat_path) {
                // Killed but not yet reaped shows up as a zombie
                Ok(stat) if stat.contains(") Z ") => {
                    gone = true;
                    break;
                }
                Ok(_) => tokio::time::sleep(Duration::from_millis(20)).await,
                Err(_) => {
                    gone = true;
                    break;
                }
            }
        }
        assert!(gone, "clipboard utility still running after timeout");
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let clipboard = SystemClipboard::with_program("definitely-not-a-clipboard-tool", &[]);
        assert!(clipboard.write_text("docker ps").await.is_err());
    }
}
