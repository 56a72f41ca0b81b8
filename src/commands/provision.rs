// The bootstrap sequence: Homebrew, rbenv + Ruby, pyenv + Python.
// Every step checks the machine first and only changes what is missing, so the
// whole sequence can be re-run safely.

use std::path::Path;

use crate::errors::Result;
use crate::installers::shellrc::apply_init_line;
use crate::installers::version_manager::setup_runtime;
use crate::libs::command_runner::{CommandRunner, SystemRunner};
use crate::libs::report;
use crate::libs::tool_installer::ensure_tool;
use crate::libs::utilities::file_operations::home_dir;
use crate::logger::section;
use crate::schemas::plan::{
    HOMEBREW, PYENV, PYENV_ZPROFILE, PYENV_ZSHRC, PYTHON, RBENV, RBENV_ZSHRC, RUBY, RUBY_BUILD,
};
use crate::{log_debug, log_info};

/// Provisions this machine using real subprocesses and the user's home directory.
pub fn run() -> Result<()> {
    let home = home_dir()?;
    provision(&SystemRunner, &home)
}

/// Runs the full sequence against `runner`, editing rc files under `home`.
///
/// Subprocess failures are logged and skipped over. Only rc file I/O errors
/// end the run early.
pub fn provision(runner: &dyn CommandRunner, home: &Path) -> Result<()> {
    log_debug!("Entered provision() with home {}", home.display());

    section("Package Manager");
    ensure_tool(runner, &HOMEBREW);

    section("Ruby");
    ensure_tool(runner, &RBENV);
    ensure_tool(runner, &RUBY_BUILD);
    let mut rc_changed = apply_init_line(home, &RBENV_ZSHRC)?;
    setup_runtime(runner, &RUBY);

    section("Python");
    ensure_tool(runner, &PYENV);
    rc_changed |= apply_init_line(home, &PYENV_ZSHRC)?;
    rc_changed |= apply_init_line(home, &PYENV_ZPROFILE)?;
    setup_runtime(runner, &PYTHON);

    section("Summary");
    report::summarize(runner, home, &[RUBY, PYTHON], rc_changed);

    log_info!("Bootstrap completed!!");
    Ok(())
}
