mod commands;
mod errors;
mod installers;
mod libs;
mod logger;
mod schemas;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(name = "devbox-bootstrap", version)]
#[command(
    about = "Install Homebrew, rbenv and pyenv, set global Ruby and Python versions, and wire them into zsh",
    long_about = None
)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, env = "DEVBOX_BOOTSTRAP_DEBUG")]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.debug);

    commands::provision::run().context("bootstrap did not complete")
}
