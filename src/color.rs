use smart_leds::RGB8;

/// Primary entries of the Meggy Jr palette, in the order of their palette byte values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    #[default]
    Dark = 0,
    Red = 1,
    Orange = 2,
    Yellow = 3,
    Green = 4,
    Blue = 5,
    Violet = 6,
    White = 7,
}

// 4-bit intensities, indexed by palette byte value
static PALETTE: [[u8; 3]; 8] = [
    [0, 0, 0],
    [15, 0, 0],
    [15, 4, 0],
    [15, 15, 0],
    [0, 15, 0],
    [0, 0, 15],
    [8, 0, 15],
    [15, 15, 15],
];

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Dark,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::White,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Scales the 4-bit palette entry up to 8 bits per channel (0xF becomes 0xFF).
    pub fn rgb(self) -> RGB8 {
        let [r, g, b] = PALETTE[self as usize];
        RGB8::new(r * 17, g * 17, b * 17)
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        color.rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_scales_to_full_range() {
        assert_eq!(Color::Dark.rgb(), RGB8::new(0, 0, 0));
        assert_eq!(Color::Red.rgb(), RGB8::new(255, 0, 0));
        assert_eq!(Color::Orange.rgb(), RGB8::new(255, 68, 0));
        assert_eq!(Color::Violet.rgb(), RGB8::new(136, 0, 255));
        assert_eq!(Color::White.rgb(), RGB8::new(255, 255, 255));
    }

    #[test]
    fn from_index_follows_palette_order() {
        for (index, color) in Color::ALL.iter().enumerate() {
            assert_eq!(Color::from_index(index as u8), Some(*color));
            assert_eq!(*color as u8, index as u8);
        }
        assert_eq!(Color::from_index(8), None);
    }
}
