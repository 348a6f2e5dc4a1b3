// render.rs - Text form of a board: "[X]" alive, "[ ]" dead, one line per row

use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;
use crate::grid::Grid;

pub const ALIVE_TOKEN: &str = "[X]";
pub const DEAD_TOKEN: &str = "[ ]";

const TOKEN_LEN: usize = 3;

/// Render every row as fixed-width tokens, each row terminated by `'\n'`.
pub fn render(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { ALIVE_TOKEN } else { DEAD_TOKEN })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Read a board back from the output of [`render`].
pub fn parse(text: &str) -> Result<Grid, LifeError> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            return Err(parse_error(line_no, "empty row"));
        }
        if line.len() % TOKEN_LEN != 0 {
            return Err(parse_error(
                line_no,
                format!("row length {} is not a multiple of {TOKEN_LEN}", line.len()),
            ));
        }
        let mut row = Vec::with_capacity(line.len() / TOKEN_LEN);
        for (col, token) in line.as_bytes().chunks(TOKEN_LEN).enumerate() {
            row.push(match token {
                b"[X]" => true,
                b"[ ]" => false,
                _ => {
                    let token = String::from_utf8_lossy(token);
                    return Err(parse_error(
                        line_no,
                        format!("unexpected token {token:?} at column {}", col + 1),
                    ));
                }
            });
        }
        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(parse_error(
                    line_no,
                    format!("row has {} cells, expected {}", row.len(), first.len()),
                ));
            }
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(parse_error(1, "no rows"));
    }
    Grid::from_rows(&rows)
}

fn parse_error(line: usize, reason: impl Into<String>) -> LifeError {
    LifeError::Parse {
        line,
        reason: reason.into(),
    }
}

impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
