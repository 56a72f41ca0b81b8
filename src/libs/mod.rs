pub mod command_runner;
pub mod probes;
pub mod report;
pub mod tool_installer;
pub mod utilities;
