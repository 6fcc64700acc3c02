use crate::color::Color;

use smart_leds::{brightness, gamma, SmartLedsWrite, RGB8};

pub const COLUMNS: usize = 8;
pub const ROWS: usize = 8;
pub const LED_COUNT: usize = COLUMNS * ROWS;

/// The two primitives a pattern needs from the hardware.
pub trait DisplayDriver {
    /// Buffers `color` at column `x`, row `y`. Nothing is visible until [`present`](Self::present).
    fn set_pixel(&mut self, x: u8, y: u8, color: Color);

    /// Pushes the buffered pixels to the LEDs, blocking until the hardware has taken them.
    fn present(&mut self);
}

// The matrix is wired as a snake: even rows run left to right, odd rows right to left.
static PIXEL_TO_LED: [u8; LED_COUNT] = [
     0,  1,  2,  3,  4,  5,  6,  7,
    15, 14, 13, 12, 11, 10,  9,  8,
    16, 17, 18, 19, 20, 21, 22, 23,
    31, 30, 29, 28, 27, 26, 25, 24,
    32, 33, 34, 35, 36, 37, 38, 39,
    47, 46, 45, 44, 43, 42, 41, 40,
    48, 49, 50, 51, 52, 53, 54, 55,
    63, 62, 61, 60, 59, 58, 57, 56,
];

/// Frame buffer for an 8x8 WS2812 matrix, flushed through any smart LED writer.
pub struct MatrixDisplay<W> {
    writer: W,
    brightness: u8,
    leds: [Color; LED_COUNT],
}

impl<W> MatrixDisplay<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    pub fn new(writer: W, brightness: u8) -> Self {
        Self {
            writer,
            brightness,
            leds: [Color::Dark; LED_COUNT],
        }
    }

    pub fn clear(&mut self) {
        self.leds.fill(Color::Dark);
    }

    pub fn pixel(&self, x: u8, y: u8) -> Option<Color> {
        led_index(x, y).map(|index| self.leds[index])
    }
}

impl<W> DisplayDriver for MatrixDisplay<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        if let Some(index) = led_index(x, y) {
            self.leds[index] = color;
        }
    }

    fn present(&mut self) {
        let colors = self.leds.iter().map(|color| color.rgb());
        // The WS2812 line has no way to report failure back to us
        let _ = self.writer.write(brightness(gamma(colors), self.brightness));
    }
}

fn led_index(x: u8, y: u8) -> Option<usize> {
    if x as usize >= COLUMNS || y as usize >= ROWS {
        return None;
    }
    let pixel_index = (y as usize) * COLUMNS + x as usize;
    Some(PIXEL_TO_LED[pixel_index] as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CapturingWriter {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for CapturingWriter {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: Iterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.map(Into::into).collect());
            Ok(())
        }
    }

    fn display() -> MatrixDisplay<CapturingWriter> {
        MatrixDisplay::new(CapturingWriter::default(), 255)
    }

    #[test]
    fn starts_dark() {
        let display = display();
        for y in 0..ROWS as u8 {
            for x in 0..COLUMNS as u8 {
                assert_eq!(display.pixel(x, y), Some(Color::Dark));
            }
        }
    }

    #[test]
    fn odd_rows_run_backwards() {
        assert_eq!(led_index(0, 0), Some(0));
        assert_eq!(led_index(7, 0), Some(7));
        assert_eq!(led_index(0, 1), Some(15));
        assert_eq!(led_index(7, 1), Some(8));
        assert_eq!(led_index(2, 5), Some(45));
        assert_eq!(led_index(7, 7), Some(56));
    }

    #[test]
    fn out_of_bounds_pixels_are_ignored() {
        let mut display = display();
        display.set_pixel(8, 0, Color::White);
        display.set_pixel(0, 8, Color::White);
        display.set_pixel(255, 255, Color::White);
        assert_eq!(display.pixel(8, 0), None);
        assert!(display.leds.iter().all(|color| *color == Color::Dark));
    }

    #[test]
    fn present_writes_whole_matrix_in_wiring_order() {
        let mut display = display();
        display.set_pixel(0, 5, Color::White);
        display.set_pixel(7, 5, Color::Red);
        display.present();

        let frames = &display.writer.frames;
        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.len(), LED_COUNT);
        assert_eq!(frame[47], RGB8::new(255, 255, 255));
        assert_eq!(frame[40], RGB8::new(255, 0, 0));
        let lit = frame.iter().filter(|led| **led != RGB8::default()).count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn present_applies_brightness() {
        let mut display = MatrixDisplay::new(CapturingWriter::default(), 0);
        display.set_pixel(3, 3, Color::White);
        display.present();
        assert!(display.writer.frames[0].iter().all(|led| *led == RGB8::default()));
    }

    #[test]
    fn clear_resets_buffer() {
        let mut display = display();
        display.set_pixel(4, 4, Color::Green);
        assert_eq!(display.pixel(4, 4), Some(Color::Green));
        display.clear();
        assert_eq!(display.pixel(4, 4), Some(Color::Dark));
    }
}
