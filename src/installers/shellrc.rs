// Wires a version manager into the user's zsh startup files.
// Each init line is appended at most once: a file that already has the line
// (ignoring surrounding whitespace) is left untouched.

use crate::errors::Result;
use crate::libs::utilities::file_operations::{append_line_if_missing, rc_file_path};
use crate::schemas::plan::ShellInitLine;
use crate::{log_debug, log_info};
use colored::Colorize;
use std::path::Path;

/// Appends `init.line` to `init.rc_file` under `home` if it is not there yet.
///
/// Returns `true` when the file changed. The new line only takes effect in a
/// new shell session; the caller reminds the user of that at the end of the run.
pub fn apply_init_line(home: &Path, init: &ShellInitLine) -> Result<bool> {
    log_info!(
        "[Shell Config] Updating {} for {}...",
        init.rc_file.to_string().cyan(),
        init.manager.bold()
    );

    let rc_path = rc_file_path(home, init.rc_file);
    log_debug!("[Shell Config] Target RC file: {}", rc_path.display());

    let added = append_line_if_missing(&rc_path, init.line)?;
    if added {
        log_info!(
            "[Shell Config] {} updated for {}: {}",
            init.rc_file.to_string().green(),
            init.manager,
            init.line.green()
        );
    } else {
        log_info!(
            "[Shell Config] {} already contains the {} init line. Skipping.",
            init.rc_file.to_string().cyan(),
            init.manager
        );
    }
    Ok(added)
}
