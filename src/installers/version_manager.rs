//! Installs a language runtime through its version manager and makes it the
//! global default.
//!
//! Works the same way for rbenv/Ruby and pyenv/Python:
//!
//! 1. `<manager> install --skip-existing <version>` unless `<interpreter> --version`
//!    already reports the target version.
//! 2. `<manager> global <version>` unless the interpreter on `PATH` is already
//!    one of the manager's shims.

use colored::Colorize;

use crate::installers::brew::locate_executable;
use crate::libs::command_runner::CommandRunner;
use crate::libs::probes::{interpreter_is_shim, reports_target_version};
use crate::schemas::plan::RuntimeSpec;
use crate::{log_info, log_warn};

/// Installs and activates `runtime.version`.
pub fn setup_runtime(runner: &dyn CommandRunner, runtime: &RuntimeSpec) {
    install_runtime(runner, runtime);
    activate_runtime(runner, runtime);
}

/// Installs the target version unless the active interpreter already reports it.
///
/// Returns `true` when the install command was run.
pub fn install_runtime(runner: &dyn CommandRunner, runtime: &RuntimeSpec) -> bool {
    log_info!(
        "[{}] Installing {} {}...",
        runtime.language,
        runtime.language,
        runtime.version.bold()
    );

    if reports_target_version(runner, runtime) {
        log_info!(
            "[{}] {} {} already installed. Skipping.",
            runtime.language,
            runtime.language,
            runtime.version.green()
        );
        return false;
    }

    let manager = locate_executable(runner, runtime.manager);
    let manager = manager.to_string_lossy();
    // The version can be installed but not active yet. Without --skip-existing
    // the manager would stop at an interactive overwrite prompt.
    if runner.status(&manager, &["install", "--skip-existing", runtime.version]) {
        log_info!(
            "[{}] {} {} installed with {}",
            runtime.language,
            runtime.language,
            runtime.version.green(),
            runtime.manager
        );
    } else {
        log_warn!(
            "[{}] '{} install {}' did not finish successfully",
            runtime.language,
            runtime.manager,
            runtime.version.yellow()
        );
    }
    true
}

/// Sets the manager's global version unless the interpreter is already a shim.
///
/// Returns `true` when the `global` command was run.
pub fn activate_runtime(runner: &dyn CommandRunner, runtime: &RuntimeSpec) -> bool {
    log_info!(
        "[{}] Setting global {} version to {}...",
        runtime.language,
        runtime.language,
        runtime.version.bold()
    );

    // TODO: compare the shim's selected version with `runtime.version` instead of
    // only checking that a shim is in use.
    if interpreter_is_shim(runner, runtime) {
        log_info!(
            "[{}] Global {} is already {} managed. Skipping.",
            runtime.language,
            runtime.language,
            runtime.manager.green()
        );
        return false;
    }

    let manager = locate_executable(runner, runtime.manager);
    let manager = manager.to_string_lossy();
    if runner.status(&manager, &["global", runtime.version]) {
        log_info!(
            "[{}] Global {} version set to {}",
            runtime.language,
            runtime.language,
            runtime.version.green()
        );
    } else {
        log_warn!(
            "[{}] '{} global {}' did not finish successfully",
            runtime.language,
            runtime.manager,
            runtime.version.yellow()
        );
    }
    true
}
