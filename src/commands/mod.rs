// Runs the whole bootstrap sequence; the binary has no subcommands.
pub mod provision;
