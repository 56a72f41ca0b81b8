// Every subprocess the bootstrap starts goes through `CommandRunner`, so the
// provisioning steps can be exercised against a fake in tests.

use crate::{log_debug, log_warn};
use colored::Colorize;
use std::path::PathBuf;
use std::process::Command;

pub trait CommandRunner {
    /// Resolves `program` on PATH.
    fn which(&self, program: &str) -> Option<PathBuf>;

    /// Runs `program` and returns stdout and stderr joined as text, or `None`
    /// when the program could not be started.
    fn capture(&self, program: &str, args: &[&str]) -> Option<String>;

    /// Runs `program` with inherited stdio and waits for it.
    /// Returns `true` when it exited successfully.
    fn status(&self, program: &str, args: &[&str]) -> bool;
}

/// Runs real processes on the host.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn which(&self, program: &str) -> Option<PathBuf> {
        match which::which(program) {
            Ok(path) => {
                log_debug!("[Runner] Resolved {} -> {}", program, path.display());
                Some(path)
            }
            Err(e) => {
                log_debug!("[Runner] {} not found on PATH: {}", program, e);
                None
            }
        }
    }

    fn capture(&self, program: &str, args: &[&str]) -> Option<String> {
        log_debug!("[Runner] Capturing: {} {}", program.cyan(), args.join(" ").cyan());
        match Command::new(program).args(args).output() {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                log_debug!("[Runner] Output: {}", text.trim());
                Some(text)
            }
            Err(e) => {
                log_debug!("[Runner] Could not start {}: {}", program, e);
                None
            }
        }
    }

    fn status(&self, program: &str, args: &[&str]) -> bool {
        log_debug!("[Runner] Executing: {} {}", program.cyan().bold(), args.join(" ").cyan());
        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                log_warn!(
                    "[Runner] '{} {}' exited with code {}",
                    program,
                    args.join(" "),
                    status.code().unwrap_or(-1)
                );
                false
            }
            Err(e) => {
                log_warn!(
                    "[Runner] Failed to execute '{}': {}",
                    program,
                    e.to_string().red()
                );
                false
            }
        }
    }
}

#[cfg(test)]
pub mod fake {
    use super::CommandRunner;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::path::PathBuf;

    /// Scripted runner that records every command it is asked to execute.
    ///
    /// `install_marks_present` makes a successful `brew install <x>` (or the
    /// Homebrew script) flip the matching executable to present, which is what
    /// a real install does to PATH.
    #[derive(Default)]
    pub struct RecordingRunner {
        pub on_path: RefCell<HashMap<String, PathBuf>>,
        pub outputs: RefCell<HashMap<String, String>>,
        pub invocations: RefCell<Vec<String>>,
        pub failing: HashSet<String>,
        pub install_marks_present: bool,
    }

    impl RecordingRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_path(self, program: &str, path: &str) -> Self {
            self.on_path
                .borrow_mut()
                .insert(program.to_string(), PathBuf::from(path));
            self
        }

        pub fn with_output(self, command: &str, output: &str) -> Self {
            self.outputs
                .borrow_mut()
                .insert(command.to_string(), output.to_string());
            self
        }

        pub fn invocations(&self) -> Vec<String> {
            self.invocations.borrow().clone()
        }

        /// Number of recorded commands ending with `suffix`.
        pub fn count(&self, suffix: &str) -> usize {
            self.invocations
                .borrow()
                .iter()
                .filter(|c| c.ends_with(suffix))
                .count()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn which(&self, program: &str) -> Option<PathBuf> {
            self.on_path.borrow().get(program).cloned()
        }

        fn capture(&self, program: &str, args: &[&str]) -> Option<String> {
            let key = format!("{} {}", program, args.join(" "));
            self.outputs.borrow().get(&key).cloned()
        }

        fn status(&self, program: &str, args: &[&str]) -> bool {
            let command = format!("{} {}", program, args.join(" "));
            self.invocations.borrow_mut().push(command.clone());
            if self.failing.iter().any(|f| command.ends_with(f.as_str())) {
                return false;
            }
            if self.install_marks_present {
                let installed = match args {
                    ["install", formula] if program.ends_with("brew") => Some(*formula),
                    ["-c", script] if script.contains("Homebrew/install") => Some("brew"),
                    _ => None,
                };
                if let Some(name) = installed {
                    self.on_path
                        .borrow_mut()
                        .insert(name.to_string(), PathBuf::from(format!("/opt/homebrew/bin/{name}")));
                }
            }
            true
        }
    }
}
