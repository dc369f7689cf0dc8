use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

use crate::models::CheckStatus;

/// Run an external tool with the target directory as cwd and map its
/// termination status: spawn error means the check failed outright,
/// a non-zero exit means the tool ran and flagged something.
///
/// No timeout is applied; a hung tool blocks the monitor.
pub async fn run_tool(program: &str, args: &[String], target: &Path) -> (CheckStatus, String) {
    debug!(
        command = %format!("{} {}", program, args.join(" ")),
        cwd = %target.display(),
        "Launching check tool"
    );

    let output = match Command::new(program)
        .args(args)
        .current_dir(target)
        .stdin(Stdio::null())
        .output()
        .await
    {
        Ok(output) => output,
        Err(e) => {
            warn!(tool = program, error = %e, "Check tool could not be started");
            return (
                CheckStatus::Failed,
                format!("could not start {}: {}", program, e),
            );
        }
    };

    debug!(tool = program, code = ?output.status.code(), "Check tool finished");

    if output.status.success() {
        return (CheckStatus::Clean, format!("{} exited cleanly", program));
    }

    let code = output
        .status
        .code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string());
    let tail = stderr_tail(&output.stderr);
    let detail = if tail.is_empty() {
        format!("{} exited with status {}", program, code)
    } else {
        format!("{} exited with status {}: {}", program, code, tail)
    };
    (CheckStatus::IssuesFound, detail)
}

/// Last non-blank stderr line, trimmed to a console-friendly length.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let line = text
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("")
        .trim();
    line.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_tail_takes_last_nonblank_line() {
        let tail = stderr_tail(b"first\nsecond\n\n   \n");
        assert_eq!(tail, "second");
    }

    #[test]
    fn test_stderr_tail_empty_input() {
        assert_eq!(stderr_tail(b""), "");
        assert_eq!(stderr_tail(b"\n\n"), "");
    }

    #[test]
    fn test_stderr_tail_caps_length() {
        let long = "x".repeat(500);
        assert_eq!(stderr_tail(long.as_bytes()).len(), 200);
    }
}
