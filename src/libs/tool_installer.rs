// Makes sure a tool from the provisioning plan is present on the machine.
// Presence is checked first; only a missing tool is installed, through the
// installer matching its `InstallSource`.

use crate::installers::brew;
use crate::libs::command_runner::CommandRunner;
use crate::libs::probes::tool_present;
use crate::schemas::plan::{InstallSource, ToolSpec};
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;

/// Installs `tool` unless its executable is already on PATH.
///
/// The install's exit status is not acted upon. The presence check is repeated
/// afterwards only to pick the message shown to the user.
///
/// Returns `true` when an install was attempted.
pub fn ensure_tool(runner: &dyn CommandRunner, tool: &ToolSpec) -> bool {
    log_info!("[Tools] Installing {}...", tool.name.bold());
    match serde_json::to_string_pretty(tool) {
        Ok(pretty) => {
            log_debug!("[Tools] Tool definition:\n{}", pretty);
        }
        Err(e) => {
            log_debug!("[Tools] Tool definition: {:?} ({})", tool, e);
        }
    }

    if tool_present(runner, tool) {
        log_info!(
            "[Tools] {} already installed. Skipping.",
            tool.name.green()
        );
        return false;
    }

    match tool.source {
        InstallSource::Script { interpreter, url } => {
            brew::run_install_script(runner, interpreter, url);
        }
        InstallSource::Formula => {
            brew::install_formula(runner, tool.name);
        }
    }

    if tool_present(runner, tool) {
        log_info!("[Tools] {} installed", tool.name.bright_green());
    } else {
        log_warn!(
            "[Tools] {} is still not on PATH. It may need a new shell session, or the install failed.",
            tool.executable.yellow()
        );
    }
    true
}
