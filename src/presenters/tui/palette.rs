use crate::presenters::cell_class::{CellClass, MAX_BAND};
use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub stable: Color,
    pub text: Color,
    pub title: Color,
    pub denied: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stable: Color::Rgb(0, 0, 0),
            text: Color::Rgb(169, 177, 214),
            title: Color::Rgb(247, 118, 142),
            denied: Color::Rgb(224, 108, 117),
        }
    }
}

impl Palette {
    /// Background for a cell: black inside the set, blue to white across the escape bands.
    #[must_use]
    pub fn cell(&self, class: CellClass) -> Color {
        match class {
            CellClass::Stable => self.stable,
            CellClass::Unstable { band } => {
                let t = band as f32 / MAX_BAND as f32;
                let channel = |from: f32, to: f32| (from + (to - from) * t).round() as u8;
                Color::Rgb(channel(20.0, 255.0), channel(40.0, 255.0), channel(120.0, 255.0))
            }
        }
    }

    /// Foreground for count text drawn over a cell of `class`.
    #[must_use]
    pub fn cell_text(&self, class: CellClass) -> Color {
        match class {
            CellClass::Stable => self.text,
            CellClass::Unstable { band } if band > MAX_BAND / 2 => Color::Black,
            CellClass::Unstable { .. } => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_cells_use_stable_colour() {
        let palette = Palette::default();

        assert_eq!(palette.cell(CellClass::Stable), palette.stable);
    }

    #[test]
    fn test_top_band_is_white() {
        let palette = Palette::default();

        assert_eq!(
            palette.cell(CellClass::Unstable { band: MAX_BAND }),
            Color::Rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_text_contrasts_with_bright_cells() {
        let palette = Palette::default();

        assert_eq!(palette.cell_text(CellClass::Unstable { band: 14 }), Color::Black);
        assert_eq!(palette.cell_text(CellClass::Unstable { band: 2 }), Color::White);
    }
}
