// Logging for devbox-bootstrap.
// Every provisioning step reports progress through these macros. Progress and
// warnings go to stdout with a colored level tag, so `devbox-bootstrap > setup.log`
// keeps the whole run. DEBUG lines go to stderr and only appear with `--debug`.

use colored::{ColoredString, Colorize};
use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

// `log_info!` for step progress and "already done" notices.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => ($crate::logger::emit($crate::logger::Level::Info, format_args!($($arg)*)));
}

// `log_warn!` for failed subprocesses and checks that still disagree after a mutation.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => ($crate::logger::emit($crate::logger::Level::Warn, format_args!($($arg)*)));
}

// `log_debug!` for command lines, captured output and resolved paths.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
           $crate::logger::emit($crate::logger::Level::Debug, format_args!($($arg)*));
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Debug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Level {
    /// Where lines of this level are written.
    pub fn stream(self) -> Stream {
        match self {
            Level::Info | Level::Warn => Stream::Stdout,
            Level::Debug => Stream::Stderr,
        }
    }

    fn tag(self) -> ColoredString {
        match self {
            Level::Info => "[INFO]".bright_green(),
            Level::Warn => "[WARN]".bright_yellow(),
            Level::Debug => "[DEBUG]".dimmed(),
        }
    }
}

/// Writes one tagged line. Called by the `log_*!` macros.
pub fn emit(level: Level, message: fmt::Arguments<'_>) {
    match level.stream() {
        Stream::Stdout => println!("{} {}", level.tag(), message),
        Stream::Stderr => eprintln!("{} {}", level.tag(), message),
    }
}

static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Sets the global debug flag. Called once from `main` before the first step runs.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    if debug {
        log_debug!("Logger initialized in DEBUG mode");
    }
}

/// Returns `true` when `init(true)` has been called. `false` before `init`.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}

/// Prints a section banner between provisioning phases.
pub fn section(title: &str) {
    println!();
    println!("{}:", title.bright_yellow().bold());
    println!("{}", "=".repeat(title.len() + 1).bright_yellow());
}
