// lib.rs - Command-line front end for seeded Game of Life runs
// Parses a request, runs it through `conway` and returns the text to print

mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub use commands::{batch, play, rerun};

#[derive(Parser, Debug)]
#[command(
    name = "conway",
    version,
    about = "Play seeded Conway's Game of Life boards"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed a board, run it and print the final generation.
    Play(PlayArgs),
    /// Play the same board size for several seeds concurrently.
    Batch(BatchArgs),
    /// Read a rendered board, run it and print the result.
    Render(RenderArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Board rows (at least 3).
    #[arg(long, env = "CONWAY_HEIGHT", default_value_t = 10, allow_negative_numbers = true)]
    pub height: i64,
    /// Board columns (at least 3).
    #[arg(long, env = "CONWAY_WIDTH", default_value_t = 10, allow_negative_numbers = true)]
    pub width: i64,
    /// Seed for the starting board.
    #[arg(long, env = "CONWAY_SEED", default_value_t = 0, allow_negative_numbers = true)]
    pub seed: i64,
    /// Generations to run; zero or negative runs none.
    #[arg(long, env = "CONWAY_ITERATIONS", default_value_t = 10, allow_negative_numbers = true)]
    pub iterations: i64,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[arg(long, env = "CONWAY_HEIGHT", default_value_t = 10, allow_negative_numbers = true)]
    pub height: i64,
    #[arg(long, env = "CONWAY_WIDTH", default_value_t = 10, allow_negative_numbers = true)]
    pub width: i64,
    #[arg(long, env = "CONWAY_ITERATIONS", default_value_t = 10, allow_negative_numbers = true)]
    pub iterations: i64,
    /// Comma-separated seeds, one independent board each.
    #[arg(
        long,
        value_delimiter = ',',
        num_args = 1..,
        required = true,
        allow_negative_numbers = true
    )]
    pub seeds: Vec<i64>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// File holding a rendered board; stdin when omitted.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub iterations: i64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Run a parsed command and return its output.
pub async fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Command::Play(args) => play(&args),
        Command::Batch(args) => batch(args).await,
        Command::Render(args) => rerun(&args),
    }
}
