//! # Homebrew Installer Module
//!
//! Installs Homebrew itself from the official install script and installs
//! formulae (`rbenv`, `ruby-build`, `pyenv`) with `brew install`.
//!
//! A freshly installed Homebrew is usually not on `PATH` until the user opens a
//! new shell, so executables are located on `PATH` first and then under the
//! well-known Homebrew prefixes.
//!
//! Exit codes are reported but never stop the bootstrap: a failed install shows
//! up as a warning and the next step runs anyway.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::libs::command_runner::CommandRunner;
use crate::{log_debug, log_info, log_warn};

/// `bin` directories Homebrew installs into, in lookup order.
///
/// - `/opt/homebrew/bin` on Apple Silicon macOS
/// - `/usr/local/bin` on Intel macOS
/// - `/home/linuxbrew/.linuxbrew/bin` on Linux
const COMMON_BREW_BIN_DIRS: [&str; 3] = [
    "/opt/homebrew/bin",
    "/usr/local/bin",
    "/home/linuxbrew/.linuxbrew/bin",
];

/// Runs the Homebrew install script: `<interpreter> -c "$(curl -fsSL <url>)"`.
///
/// The command line is handed to `/bin/sh` so the command substitution behaves
/// exactly like the one-liner from the Homebrew homepage.
///
/// # Returns
/// `true` if the script exited successfully.
pub fn run_install_script(runner: &dyn CommandRunner, interpreter: &str, url: &str) -> bool {
    let command_line = install_script_command(interpreter, url);
    log_info!(
        "[Homebrew] Running the install script from {}",
        url.cyan()
    );
    log_debug!("[Homebrew] Command line: {}", command_line);

    let ok = runner.status("/bin/sh", &["-c", &command_line]);
    if !ok {
        log_warn!("[Homebrew] Install script did not finish successfully");
    }
    ok
}

fn install_script_command(interpreter: &str, url: &str) -> String {
    format!(r#"{interpreter} -c "$(curl -fsSL {url})""#)
}

/// Installs one formula with `brew install <formula>`.
///
/// # Returns
/// `true` if brew exited successfully.
pub fn install_formula(runner: &dyn CommandRunner, formula: &str) -> bool {
    let brew = locate_executable(runner, "brew");
    log_info!(
        "[Homebrew] Installing formula: {}",
        formula.bold()
    );
    log_debug!(
        "[Homebrew] Executing: {} install {}",
        brew.display().to_string().cyan().bold(),
        formula.cyan()
    );

    let brew = brew.to_string_lossy();
    let ok = runner.status(&brew, &["install", formula]);
    if !ok {
        log_warn!(
            "[Homebrew] 'brew install {}' did not finish successfully",
            formula.yellow()
        );
    }
    ok
}

/// Finds `executable` on `PATH`, then in the Homebrew `bin` directories.
///
/// Falls back to the bare name so the spawn error is reported by the runner.
pub fn locate_executable(runner: &dyn CommandRunner, executable: &str) -> PathBuf {
    if let Some(path) = runner.which(executable) {
        return path;
    }

    if let Some(path) = find_in_brew_dirs(COMMON_BREW_BIN_DIRS.iter().map(Path::new), executable) {
        log_debug!(
            "[Homebrew] {} is not on PATH, using {}",
            executable,
            path.display()
        );
        return path;
    }

    PathBuf::from(executable)
}

fn find_in_brew_dirs<'a>(
    dirs: impl Iterator<Item = &'a Path>,
    executable: &str,
) -> Option<PathBuf> {
    dirs.map(|dir| dir.join(executable)).find(|path| path.is_file())
}
