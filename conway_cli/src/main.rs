// main.rs - Entry point for the `conway` command

use anyhow::Result;
use clap::Parser;
use conway_cli::{Cli, run};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let output = run(cli).await?;
    print!("{output}");
    Ok(())
}

// Logs go to stderr so stdout carries only the board.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
