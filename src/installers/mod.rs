// Installers for the individual pieces the bootstrap sets up.

/// Homebrew itself and `brew install` of formulae.
pub(crate) mod brew;

/// Appending version-manager init lines to `~/.zshrc` and `~/.zprofile`.
pub(crate) mod shellrc;

/// `rbenv`/`pyenv` runtime install and global version selection.
pub(crate) mod version_manager;
