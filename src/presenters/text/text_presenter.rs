use crate::controllers::plot::ports::presenter::{PlotEvent, PlotPresenterPort};
use crate::core::data::grid::Grid;
use crate::core::data::viewport::Bounds;
use crate::presenters::cell_class::{CellClass, DisplayMode, classify, count_width};
use std::fmt::Write;
use std::sync::{Mutex, PoisonError};

pub const TITLE: &str = "mandel_plot";

/// Glyph per band; index 0 is used for stable cells.
const SHADES: [char; 16] = [
    '#', ' ', '.', '\'', ',', ':', ';', '-', '~', '=', '+', '*', 'o', 'x', 'O', '%',
];

#[must_use]
pub fn title_line(bounds: &Bounds) -> String {
    format!("{TITLE} -- {bounds}")
}

fn shade(escape_count: u32) -> char {
    match classify(escape_count) {
        CellClass::Stable => SHADES[0],
        CellClass::Unstable { band } => SHADES[band as usize],
    }
}

/// Plain-text rendering of a grid, one line per row.
///
/// In counts mode every column is wide enough for any count below `max_iterations`.
#[must_use]
pub fn render_grid(grid: &Grid, mode: DisplayMode, max_iterations: u32) -> String {
    let width = count_width(max_iterations);
    let mut out = String::with_capacity(grid.cell_count() * width + grid.size());

    for row in grid.rows() {
        for &count in row {
            match mode {
                DisplayMode::Shaded => {
                    let glyph = shade(count);
                    out.push(glyph);
                    out.push(glyph);
                }
                DisplayMode::Counts => {
                    let _ = write!(out, "{count:>width$}");
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Tracks the display mode through plot events.
#[derive(Debug, Default)]
pub struct TextPresenter {
    mode: Mutex<DisplayMode>,
}

impl TextPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn render(&self, bounds: &Bounds, grid: &Grid) -> String {
        format!("{}\n{}", title_line(bounds), render_grid(grid, self.mode(), bounds.max_iterations))
    }
}

impl PlotPresenterPort for TextPresenter {
    fn present(&self, event: &PlotEvent) {
        if let PlotEvent::DisplayToggled = event {
            let mut mode = self.mode.lock().unwrap_or_else(PoisonError::into_inner);
            *mode = mode.toggled();
        }
    }
}
