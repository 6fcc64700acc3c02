use crate::animation::{self, Animation};
use crate::color::Color;
use crate::display::{DisplayDriver, COLUMNS};

pub type ColorRow = [Color; COLUMNS];

pub const RAINBOW: ColorRow = [
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    Color::Violet,
    Color::White,
    Color::Dark,
];

/// A rainbow pinned to a single display row.
pub struct Rainbow {
    colors: ColorRow,
    row: u8,
}

impl Rainbow {
    pub const fn new(row: u8) -> Self {
        Self {
            colors: RAINBOW,
            row,
        }
    }

    pub fn colors(&self) -> &ColorRow {
        &self.colors
    }

    pub fn row(&self) -> u8 {
        self.row
    }
}

impl Animation for Rainbow {
    fn render_frame<D: DisplayDriver>(&mut self, display: &mut D) {
        animation::draw_row(display, &self.colors, self.row);
    }
}
