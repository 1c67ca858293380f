use crate::core::data::grid::Grid;
use crate::input::keys::KEY_HELP;
use crate::presenters::cell_class::{DisplayMode, classify, count_width};
use crate::presenters::tui::palette::Palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Everything one terminal frame shows.
pub struct PlotView<'a> {
    pub title: String,
    pub grid: &'a Grid,
    pub mode: DisplayMode,
    pub max_iterations: u32,
    pub status: Option<String>,
    /// A newer viewport is still being repainted.
    pub pending: bool,
}

const PENDING: &str = "repainting...";

#[must_use]
pub fn grid_lines(grid: &Grid, mode: DisplayMode, max_iterations: u32, palette: &Palette) -> Vec<Line<'static>> {
    let width = count_width(max_iterations);

    grid.rows()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .iter()
                .map(|&count| {
                    let class = classify(count);
                    let style = Style::default().bg(palette.cell(class));

                    match mode {
                        DisplayMode::Shaded => Span::styled("  ", style),
                        DisplayMode::Counts => {
                            Span::styled(format!("{count:>width$}"), style.fg(palette.cell_text(class)))
                        }
                    }
                })
                .collect();

            Line::from(spans)
        })
        .collect()
}

pub fn draw(frame: &mut Frame, view: &PlotView, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        view.title.clone(),
        Style::default().fg(palette.title).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, chunks[0]);

    frame.render_widget(Paragraph::new(grid_lines(view.grid, view.mode, view.max_iterations, palette)), chunks[1]);

    let footer = match &view.status {
        Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(palette.denied))),
        None if view.pending => Line::from(Span::styled(PENDING, Style::default().fg(palette.text))),
        None => Line::from(Span::styled(KEY_HELP, Style::default().fg(palette.text))),
    };
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
