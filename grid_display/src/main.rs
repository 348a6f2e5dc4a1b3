// main.rs - Desktop viewer for seeded Game of Life boards
// Board state and actions live here, drawing lives in ui.rs

use conway::patterns::PATTERNS;
use conway::{Grid, PlayParams, advance, play};
use eframe::egui;
use egui::Color32;
use tracing::{info, warn};

mod ui;

fn main() -> Result<(), eframe::Error> {
    init_tracing();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Seeded Game of Life",
        options,
        Box::new(|_cc| Box::new(GridApp::default())),
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub struct GridApp {
    pub params: PlayParams,
    pub grid: Option<Grid>,
    pub error: Option<String>,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl Default for GridApp {
    fn default() -> Self {
        let mut app = Self {
            params: PlayParams::default(),
            grid: None,
            error: None,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
        };
        app.play();
        app
    }
}

/// Live/dead totals for the status line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStats {
    pub live: usize,
    pub dead: usize,
    pub population: f32,
}

impl GridApp {
    /// Seed and run a board from the current parameters.
    pub fn play(&mut self) {
        match play(&self.params) {
            Ok(grid) => {
                self.grid = Some(grid);
                self.error = None;
            }
            Err(err) => {
                warn!(%err, "rejected play request");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Run the configured number of generations on the board being shown.
    pub fn advance_current(&mut self) {
        if let Some(grid) = self.grid.take() {
            self.grid = Some(advance(grid, self.params.iterations));
        }
    }

    /// Replace the board with an empty one of the current size holding the
    /// selected pattern in its middle.
    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let placed = self.params.validate().and_then(|(height, width)| {
            let mut grid = Grid::new(height, width)?;
            pattern.place_centered(&mut grid)?;
            Ok(grid)
        });
        match placed {
            Ok(grid) => {
                info!(pattern = pattern.name, "placed pattern");
                self.grid = Some(grid);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn clear_grid(&mut self) {
        if let Some(grid) = &self.grid {
            self.grid = Grid::new(grid.height(), grid.width()).ok();
        }
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        if let Some(grid) = &mut self.grid {
            let alive = grid.is_alive(row, col);
            grid.set(row, col, !alive);
        }
    }

    pub fn stats(&self) -> Option<BoardStats> {
        self.grid.as_ref().map(|grid| {
            let total = grid.cells().len();
            let live = grid.live_count();
            BoardStats {
                live,
                dead: total - live,
                population: live as f32 / total as f32 * 100.0,
            }
        })
    }
}
