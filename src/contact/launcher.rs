use super::ContactError;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::debug;

/// Hand a URL to the platform's default browser.
///
/// Returns as soon as the launcher has started. The launcher gets no access
/// to the terminal; pass the child to [`wait_for_launcher`] to learn whether
/// it succeeded.
pub fn open_in_browser(url: &str) -> Result<Child, ContactError> {
    debug!("Opening {} in browser", url);
    launch(browser_command(url))
}

fn launch(mut command: Command) -> Result<Child, ContactError> {
    // The terminal belongs to the TUI
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command.spawn().map_err(|e| ContactError::Launch(e.to_string()))
}

/// Wait for a launcher started by [`open_in_browser`] to exit
pub async fn wait_for_launcher(mut child: Child) -> Result<(), ContactError> {
    let status = child
        .wait()
        .await
        .map_err(|e| ContactError::Launch(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ContactError::Launch(format!("launcher exited with {}", status)))
    }
}

#[cfg(target_os = "macos")]
fn browser_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(windows)]
fn browser_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn browser_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Put the URL on the clipboard as a fallback when no browser can be launched
pub fn copy_to_clipboard(text: &str) -> Result<(), ContactError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| ContactError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ContactError::Clipboard(e.to_string()))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn stub_launcher(script: &str) -> Command {
        let mut command = Command::new("sh");
        command.args(["-c", script, "xdg-open", "https://example.org"]);
        command
    }

    #[tokio::test]
    async fn test_launch_returns_while_launcher_runs() {
        let started = Instant::now();
        let mut child = launch(stub_launcher("sleep 5")).unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));

        // Still running: nothing waited on it
        assert!(child.try_wait().unwrap().is_none());
        child.kill().await.unwrap();
    }

    #[tokio::test]
    async fn test_launcher_gets_no_terminal_input() {
        // `read` only succeeds when stdin carries data
        let child = launch(stub_launcher("read line && exit 0; exit 3")).unwrap();
        let result = tokio::time::timeout(Duration::from_secs(5), wait_for_launcher(child))
            .await
            .unwrap();
        assert!(matches!(result, Err(ContactError::Launch(message)) if message.contains('3')));
    }

    #[tokio::test]
    async fn test_successful_launcher() {
        let child = launch(stub_launcher("exit 0")).unwrap();
        assert!(wait_for_launcher(child).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_launcher_fails_to_spawn() {
        let command = Command::new("/nonexistent/fieldfolio-launcher");
        assert!(matches!(launch(command), Err(ContactError::Launch(_))));
    }
}
