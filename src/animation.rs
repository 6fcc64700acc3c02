use crate::display::DisplayDriver;
use crate::pattern::ColorRow;

use core::sync::atomic::{AtomicBool, Ordering};

pub trait Animation {
    /// Renders one full pass of the animation to the display.
    ///
    /// Implementations decide when to call `display.present()`; a pass may present more than once.
    fn render_frame<D: DisplayDriver>(&mut self, display: &mut D);
}

/// Asks a running [`run`] loop to return after its current pass.
pub struct StopSignal {
    raised: AtomicBool,
}

impl StopSignal {
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws `colors` left to right on `row`, presenting after every pixel.
pub fn draw_row<D: DisplayDriver>(display: &mut D, colors: &ColorRow, row: u8) {
    for (x, color) in colors.iter().enumerate() {
        display.set_pixel(x as u8, row, *color);
        display.present();
    }
}

/// Renders `animation` pass after pass until `stop` is raised.
pub fn run<A, D>(animation: &mut A, display: &mut D, stop: &StopSignal)
where
    A: Animation,
    D: DisplayDriver,
{
    log::info!("render loop started");
    let mut passes: u32 = 0;
    while !stop.is_raised() {
        animation.render_frame(display);
        passes = passes.wrapping_add(1);
        log::trace!("pass {} done", passes);
    }
    log::info!("render loop stopped after {} passes", passes);
}
