use conway::patterns::find;
use conway::{Grid, PlayParams, advance, initialize, parse, play_rendered, render, step};

const SEED_23213_START: &str = "\
[X][ ][ ][ ][ ][X][X][ ][ ][ ]
[ ][X][X][X][ ][X][X][X][ ][ ]
[ ][X][X][ ][ ][ ][X][ ][X][X]
[X][ ][X][X][ ][ ][X][X][ ][ ]
[ ][ ][ ][ ][X][X][ ][X][X][ ]
[X][X][X][X][X][X][ ][ ][ ][X]
[ ][X][X][X][ ][X][ ][ ][X][X]
[X][ ][ ][X][X][ ][ ][X][X][X]
[X][X][X][ ][ ][ ][ ][X][ ][X]
[ ][X][ ][X][X][X][ ][X][X][X]
";

const SEED_23213_AFTER_10: &str = "\
[ ][X][X][ ][ ][ ][ ][ ][ ][ ]
[X][ ][ ][X][ ][ ][ ][X][X][ ]
[ ][ ][ ][X][X][ ][X][ ][ ][ ]
[ ][X][ ][X][ ][X][ ][ ][ ][ ]
[ ][ ][X][ ][ ][ ][X][ ][X][ ]
[ ][ ][ ][ ][ ][ ][ ][X][ ][ ]
[ ][ ][ ][ ][ ][ ][ ][ ][ ][ ]
[ ][ ][ ][ ][ ][ ][ ][ ][ ][ ]
[ ][ ][ ][ ][ ][ ][ ][ ][ ][ ]
[ ][ ][ ][ ][ ][ ][ ][ ][ ][ ]
";

fn with_pattern(height: usize, width: usize, name: &str, row: usize, col: usize) -> Grid {
    let mut grid = Grid::new(height, width).unwrap();
    find(name).unwrap().place(&mut grid, row, col).unwrap();
    grid
}

#[test]
fn seeded_board_is_reproducible_across_runs() {
    let board = initialize(10, 10, 23213).unwrap();
    assert_eq!(render(&board), SEED_23213_START);
}

#[test]
fn seeded_board_after_ten_generations() {
    let board = advance(initialize(10, 10, 23213).unwrap(), 10);
    assert_eq!(render(&board), SEED_23213_AFTER_10);
}

#[test]
fn play_produces_the_same_text() {
    let params = PlayParams {
        height: 10,
        width: 10,
        seed: 23213,
        iterations: 10,
    };
    assert_eq!(play_rendered(&params).unwrap(), SEED_23213_AFTER_10);
}

#[test]
fn negative_seed_on_rectangular_board() {
    let start = initialize(5, 8, -1).unwrap();
    assert_eq!(
        render(&start),
        "[ ][ ][ ][X][X][X][ ][ ]\n\
         [X][ ][X][ ][ ][ ][ ][X]\n\
         [X][X][X][X][X][ ][X][ ]\n\
         [X][ ][ ][ ][ ][ ][X][X]\n\
         [ ][ ][ ][X][X][ ][X][ ]\n"
    );
    let expected = parse(
        "[ ][ ][ ][ ][ ][ ][ ][ ]\n\
         [ ][X][ ][ ][ ][ ][ ][ ]\n\
         [X][ ][X][ ][ ][X][ ][ ]\n\
         [ ][ ][ ][ ][X][X][X][ ]\n\
         [ ][ ][ ][ ][ ][ ][ ][ ]\n",
    )
    .unwrap();
    assert_eq!(advance(start, 3), expected);
}

#[test]
fn block_is_a_still_life() {
    let block = with_pattern(4, 4, "Block", 1, 1);
    assert_eq!(advance(block.clone(), 50), block);
}

#[test]
fn period_two_oscillators() {
    for (name, height, width, row, col) in [
        ("Blinker", 5, 5, 2, 1),
        ("Toad", 6, 6, 2, 1),
        ("Beacon", 4, 4, 0, 0),
    ] {
        let start = with_pattern(height, width, name, row, col);
        let once = step(&start);
        assert_ne!(once, start, "{name} should change after one generation");
        assert_eq!(step(&once), start, "{name} should return after two");
        assert_eq!(advance(start.clone(), 100), start, "{name} after 100");
    }
}

#[test]
fn pulsar_has_period_three() {
    let start = with_pattern(17, 17, "Pulsar", 2, 2);
    assert_ne!(advance(start.clone(), 1), start);
    assert_ne!(advance(start.clone(), 2), start);
    assert_eq!(advance(start.clone(), 3), start);
}

#[test]
fn glider_moves_diagonally() {
    let start = with_pattern(10, 10, "Glider", 0, 0);
    let moved = with_pattern(10, 10, "Glider", 1, 1);
    assert_eq!(advance(start, 4), moved);
}

#[test]
fn glider_stops_at_the_corner_instead_of_wrapping() {
    let start = with_pattern(6, 6, "Glider", 0, 0);
    let end = advance(start, 40);
    let block = with_pattern(6, 6, "Block", 4, 4);
    assert_eq!(end, block);
}

#[test]
fn r_pentomino_first_generation() {
    let start = with_pattern(3, 3, "R-pentomino", 0, 0);
    assert_eq!(render(&step(&start)), "[X][X][X]\n[X][ ][ ]\n[X][X][ ]\n");
}

#[test]
fn grid_json_round_trip_preserves_cells() {
    let board = initialize(4, 6, 99).unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn grid_json_with_wrong_cell_count_is_rejected() {
    let json = r#"{"height": 2, "width": 2, "cells": [true, false, true]}"#;
    assert!(serde_json::from_str::<Grid>(json).is_err());
    let json = r#"{"height": 0, "width": 2, "cells": []}"#;
    assert!(serde_json::from_str::<Grid>(json).is_err());
}

#[test]
fn grid_json_with_overflowing_dimensions_is_rejected() {
    let json = r#"{"height": 4294967296, "width": 4294967296, "cells": []}"#;
    assert!(serde_json::from_str::<Grid>(json).is_err());
    let json = format!(r#"{{"height": {}, "width": 2, "cells": []}}"#, usize::MAX);
    assert!(serde_json::from_str::<Grid>(&json).is_err());
}

#[test]
fn grid_json_with_large_dimensions_and_no_cells_is_rejected() {
    let json = r#"{"height": 100000, "width": 100000, "cells": []}"#;
    let err = serde_json::from_str::<Grid>(json).unwrap_err();
    assert!(err.to_string().contains("expected 10000000000 cells"), "{err}");
}
