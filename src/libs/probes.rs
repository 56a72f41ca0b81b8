// Presence checks. Each one re-reads the machine's current state; nothing is cached
// between steps.

use crate::libs::command_runner::CommandRunner;
use crate::log_debug;
use crate::schemas::plan::{RuntimeSpec, ToolSpec};
use std::path::Path;

/// `true` when the tool's executable resolves on PATH.
pub fn tool_present(runner: &dyn CommandRunner, tool: &ToolSpec) -> bool {
    let present = runner.which(tool.executable).is_some();
    log_debug!("[Probe] {} present: {}", tool.name, present);
    present
}

/// `true` when `<interpreter> --version` mentions the target version.
pub fn reports_target_version(runner: &dyn CommandRunner, runtime: &RuntimeSpec) -> bool {
    runner
        .capture(runtime.interpreter, &["--version"])
        .map(|out| out.trim().contains(runtime.version))
        .unwrap_or(false)
}

/// `true` when the interpreter on PATH lives under the manager's directory,
/// e.g. `~/.rbenv/shims/ruby`.
pub fn interpreter_is_shim(runner: &dyn CommandRunner, runtime: &RuntimeSpec) -> bool {
    runner
        .which(runtime.interpreter)
        .map(|path| under_manager_dir(&path, runtime.manager_dir))
        .unwrap_or(false)
}

fn under_manager_dir(path: &Path, manager_dir: &str) -> bool {
    path.components()
        .any(|component| component.as_os_str() == manager_dir)
}

/// First line of `<interpreter> --version`, for the closing report.
pub fn active_version(runner: &dyn CommandRunner, runtime: &RuntimeSpec) -> Option<String> {
    runner
        .capture(runtime.interpreter, &["--version"])
        .and_then(|out| out.lines().next().map(|l| l.trim().to_string()))
        .filter(|line| !line.is_empty())
}
