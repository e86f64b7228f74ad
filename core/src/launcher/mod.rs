//! Launches container entries as independent OS processes.

use crate::types::Container;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Per-batch launch tally. Failures are already logged individually.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub launched: usize,
    pub failed: usize,
}

/// Starts one detached process per entry with a non-empty path, using the
/// platform's default open association. A failed entry is logged and the rest
/// of the batch still runs. Containers in edit mode (and the add marker)
/// launch nothing.
pub fn launch(container: &Container) -> LaunchOutcome {
    let mut outcome = LaunchOutcome::default();

    if container.is_add_marker() || container.edit_mode {
        return outcome;
    }

    for entry in &container.entries {
        if entry.file_path.as_os_str().is_empty() {
            continue;
        }
        match spawn_detached(&entry.file_path) {
            Ok(()) => {
                debug!(path = %entry.file_path.display(), "launched");
                outcome.launched += 1;
            }
            Err(e) => {
                warn!(path = %entry.file_path.display(), error = %e, "launch failed");
                outcome.failed += 1;
            }
        }
    }

    outcome
}

/// No arguments, no captured output, no exit-code handling; the child is on
/// its own once spawned.
fn spawn_detached(path: &Path) -> std::io::Result<()> {
    open_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    // Empty string is the window title slot of `start`
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
