//! forge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use forge_cli_lib::{GenerateCommand, PathRoots};

#[derive(Parser)]
#[command(name = "forge")]
#[command(version)]
#[command(about = "Scaffold generator for convention-based MVC applications", long_about = None)]
struct Cli {
    /// Application directory holding models/, controllers/, views/,
    /// migrations/, and tests/
    #[arg(long, global = true, default_value = "application")]
    app_dir: PathBuf,

    /// Public directory holding css/ and js/
    #[arg(long, global = true, default_value = "public")]
    public_dir: PathBuf,

    #[command(subcommand)]
    command: GenerateCommand,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let roots = PathRoots::new(cli.app_dir, cli.public_dir);
    cli.command.execute(roots)
}
