//! gridstep: watch a path search unfold on a text grid.

mod commands;
mod mapgen;
mod render;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    Cli::parse().command.run()
}
