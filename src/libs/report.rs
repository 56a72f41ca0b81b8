// Closing summary printed after the provisioning sequence.

use crate::libs::command_runner::CommandRunner;
use crate::libs::probes::{active_version, interpreter_is_shim};
use crate::schemas::plan::RuntimeSpec;
use crate::{log_info, log_warn};
use colored::Colorize;
use std::path::Path;

/// What the machine looks like once the steps have run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStatus {
    pub language: &'static str,
    pub active_version: Option<String>,
    pub managed: bool,
}

pub fn runtime_status(runner: &dyn CommandRunner, runtime: &RuntimeSpec) -> RuntimeStatus {
    RuntimeStatus {
        language: runtime.language,
        active_version: active_version(runner, runtime),
        managed: interpreter_is_shim(runner, runtime),
    }
}

pub fn oh_my_zsh_installed(home: &Path) -> bool {
    home.join(".oh-my-zsh").is_dir()
}

/// Logs the runtime summary, oh-my-zsh presence and a new-shell reminder when
/// an rc file changed.
pub fn summarize(
    runner: &dyn CommandRunner,
    home: &Path,
    runtimes: &[RuntimeSpec],
    rc_changed: bool,
) {
    for runtime in runtimes {
        let status = runtime_status(runner, runtime);
        let version = status
            .active_version
            .unwrap_or_else(|| "not found".to_string());
        let managed = if status.managed {
            format!("{} shim", runtime.manager).green()
        } else {
            "not shimmed".yellow()
        };
        log_info!("[Summary] {}: {} ({})", status.language.bold(), version, managed);
    }

    if oh_my_zsh_installed(home) {
        log_info!("[Summary] oh-my-zsh: {}", "installed".green());
    } else {
        log_info!("[Summary] oh-my-zsh: {}", "not installed".dimmed());
    }

    if rc_changed {
        log_warn!(
            "[Summary] Shell startup files changed. Open a new terminal (or run {}) to pick them up.",
            "exec zsh -l".cyan()
        );
    }
}
