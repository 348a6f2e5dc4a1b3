// commands.rs - Play, batch and render handlers for the CLI

use std::fmt::Write as _;

use anyhow::{Context, Result};
use conway::{Grid, PlayParams, advance, parse};
use serde::Serialize;
use tracing::{debug, info};

use crate::{BatchArgs, Format, PlayArgs, RenderArgs};

#[derive(Serialize)]
struct PlayReport<'a> {
    params: &'a PlayParams,
    live_cells: usize,
    grid: &'a Grid,
}

pub fn play(args: &PlayArgs) -> Result<String> {
    let params = PlayParams {
        height: args.height,
        width: args.width,
        seed: args.seed,
        iterations: args.iterations,
    };
    let grid = conway::play(&params)?;
    match args.format {
        Format::Text => Ok(grid.to_string()),
        Format::Json => {
            let report = PlayReport {
                params: &params,
                live_cells: grid.live_count(),
                grid: &grid,
            };
            let mut json =
                serde_json::to_string_pretty(&report).context("failed to format board JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Run one board per seed on the blocking pool and report them in the
/// order the seeds were given.
pub async fn batch(args: BatchArgs) -> Result<String> {
    let base = PlayParams {
        height: args.height,
        width: args.width,
        seed: 0,
        iterations: args.iterations,
    };
    // Reject bad sizes once instead of once per seed.
    base.validate()?;

    let handles: Vec<_> = args
        .seeds
        .iter()
        .map(|&seed| {
            let params = PlayParams { seed, ..base };
            tokio::task::spawn_blocking(move || conway::play(&params).map(|grid| (seed, grid)))
        })
        .collect();
    info!(boards = handles.len(), "batch started");

    let mut output = String::new();
    for handle in handles {
        let (seed, grid) = handle.await.context("board task panicked")??;
        debug!(seed, live = grid.live_count(), "batch board finished");
        writeln!(output, "seed {seed}: {} live cells", grid.live_count())?;
        output.push_str(&grid.to_string());
    }
    Ok(output)
}

/// Parse a rendered board from a file or stdin and run it forward.
pub fn rerun(args: &RenderArgs) -> Result<String> {
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display()))?,
        None => std::io::read_to_string(std::io::stdin())
            .context("failed to read board from stdin")?,
    };
    let grid = parse(&text).context("invalid board text")?;
    debug!(height = grid.height(), width = grid.width(), "parsed board");
    Ok(advance(grid, args.iterations).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_args(height: i64, width: i64) -> PlayArgs {
        PlayArgs {
            height,
            width,
            seed: 23213,
            iterations: 10,
            format: Format::Text,
        }
    }

    #[test]
    fn play_text_matches_library() {
        let text = play(&play_args(6, 9)).unwrap();
        let expected = conway::play_rendered(&PlayParams {
            height: 6,
            width: 9,
            seed: 23213,
            iterations: 10,
        })
        .unwrap();
        assert_eq!(text, expected);
    }

    #[test]
    fn play_reports_validation_message() {
        let err = play(&play_args(2, 10)).unwrap_err();
        assert_eq!(err.to_string(), "Height of board can't be less than 3");
    }

    #[test]
    fn play_json_contains_grid_and_count() {
        let args = PlayArgs {
            format: Format::Json,
            ..play_args(4, 4)
        };
        let json: serde_json::Value = serde_json::from_str(&play(&args).unwrap()).unwrap();
        assert_eq!(json["params"]["seed"], 23213);
        assert_eq!(json["grid"]["height"], 4);
        assert_eq!(json["grid"]["cells"].as_array().unwrap().len(), 16);
        let live = json["grid"]["cells"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|cell| cell.as_bool() == Some(true))
            .count();
        assert_eq!(json["live_cells"], live);
    }
}
