//! The fixed provisioning plan.
//!
//! There is no configuration file: every tool, runtime version and rc-file line
//! the bootstrap touches is a constant here. The records are `Serialize` so the
//! plan can be pretty-printed in debug logs.

use serde::Serialize;
use std::fmt;

/// Official Homebrew install script.
pub const HOMEBREW_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

pub const RUBY_VERSION: &str = "2.7.3";
pub const PYTHON_VERSION: &str = "3.10.1";

/// How a missing tool gets installed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstallSource {
    /// Fetch a remote script with curl and run it under `interpreter`.
    Script {
        interpreter: &'static str,
        url: &'static str,
    },
    /// `brew install <name>`.
    Formula,
}

/// A tool whose presence is checked by resolving `executable` on PATH.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub executable: &'static str,
    pub source: InstallSource,
}

/// A language runtime managed by a version manager.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RuntimeSpec {
    pub language: &'static str,
    /// Interpreter probed with `--version` and resolved for the shim check.
    pub interpreter: &'static str,
    /// Version manager executable (`rbenv`, `pyenv`).
    pub manager: &'static str,
    /// Directory name the manager keeps its shims under.
    pub manager_dir: &'static str,
    pub version: &'static str,
}

/// Shell startup files the bootstrap appends to.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum RcFile {
    Zshrc,
    Zprofile,
}

impl RcFile {
    /// File name relative to the home directory.
    pub fn file_name(self) -> &'static str {
        match self {
            RcFile::Zshrc => ".zshrc",
            RcFile::Zprofile => ".zprofile",
        }
    }
}

impl fmt::Display for RcFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~/{}", self.file_name())
    }
}

/// One line a version manager needs in one rc file.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ShellInitLine {
    pub manager: &'static str,
    pub rc_file: RcFile,
    pub line: &'static str,
}

pub const HOMEBREW: ToolSpec = ToolSpec {
    name: "Homebrew",
    executable: "brew",
    source: InstallSource::Script {
        interpreter: "/bin/bash",
        url: HOMEBREW_INSTALL_URL,
    },
};

pub const RBENV: ToolSpec = ToolSpec {
    name: "rbenv",
    executable: "rbenv",
    source: InstallSource::Formula,
};

pub const RUBY_BUILD: ToolSpec = ToolSpec {
    name: "ruby-build",
    executable: "ruby-build",
    source: InstallSource::Formula,
};

pub const PYENV: ToolSpec = ToolSpec {
    name: "pyenv",
    executable: "pyenv",
    source: InstallSource::Formula,
};

pub const RUBY: RuntimeSpec = RuntimeSpec {
    language: "Ruby",
    interpreter: "ruby",
    manager: "rbenv",
    manager_dir: ".rbenv",
    version: RUBY_VERSION,
};

pub const PYTHON: RuntimeSpec = RuntimeSpec {
    language: "Python",
    interpreter: "python",
    manager: "pyenv",
    manager_dir: ".pyenv",
    version: PYTHON_VERSION,
};

pub const RBENV_ZSHRC: ShellInitLine = ShellInitLine {
    manager: "rbenv",
    rc_file: RcFile::Zshrc,
    line: r#"eval "$(rbenv init -)""#,
};

pub const PYENV_ZSHRC: ShellInitLine = ShellInitLine {
    manager: "pyenv",
    rc_file: RcFile::Zshrc,
    line: r#"eval "$(pyenv init -)""#,
};

pub const PYENV_ZPROFILE: ShellInitLine = ShellInitLine {
    manager: "pyenv",
    rc_file: RcFile::Zprofile,
    line: r#"eval "$(pyenv init --path)""#,
};
