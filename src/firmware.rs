use meggy_rainbow::animation::{self, StopSignal};
use meggy_rainbow::color::Color;
use meggy_rainbow::display::{DisplayDriver, MatrixDisplay};
use meggy_rainbow::pattern::Rainbow;

use rp_pico::entry;
use panic_halt as _;
use rp_pico::hal; // Hardware Abstraction Layer (higher-level drivers)
use rp_pico::hal::pac; // Peripheral Access Crate (low-level register access)
use rp_pico::hal::pac::interrupt;
use rp_pico::hal::pio::PIOExt;
use rp_pico::hal::timer::Alarm;
use rp_pico::hal::Clock;
use embedded_hal::digital::OutputPin;
use ws2812_pio::Ws2812Direct;

use fugit::MicrosDurationU32;

use crate::error::Error;
use crate::global_state::{self, SharedState, ATOMIC_STATE, SHARED_STATE};

const TARGET_ROW: u8 = 5;
const BRIGHTNESS: u8 = 32;
const PRESENT_INTERVAL: MicrosDurationU32 = MicrosDurationU32::millis(10);

// Nothing on the board raises this; the rainbow runs until reset or power-off.
static STOP: StopSignal = StopSignal::new();

#[entry]
fn main() -> ! {
    if let Err(error) = start() {
        panic!("board bring-up failed: {}", error);
    }

    loop {
        cortex_m::asm::wfi();
    }
}

fn start() -> Result<(), Error> {
    let mut pac = pac::Peripherals::take().ok_or(Error::PeripheralsTaken)?;

    let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

    // Configure the clocks (125 MHz system clock)
    let clocks = hal::clocks::init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| Error::Clocks)?;

    let sio = hal::Sio::new(pac.SIO); // single-cycle IO
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    // On-board LED doubles as a power indicator
    let mut led_pin = pins.led.into_push_pull_output();
    let _ = led_pin.set_high();

    // WS2812 data line for the 8x8 matrix, driven by PIO0 state machine 0
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let leds = Ws2812Direct::new(
        pins.gpio16.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
    );

    let mut timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let mut alarm0 = timer.alarm_0().ok_or(Error::AlarmUnavailable)?;
    alarm0.enable_interrupt();
    let mut shared_state = SharedState {
        alarm0,
        present_interval: PRESENT_INTERVAL,
    };
    shared_state.alarm0_reschedule()?;
    cortex_m::interrupt::free(|cs| {
        SHARED_STATE.borrow(cs).replace(Some(shared_state));
    });

    unsafe {
        pac::NVIC::unmask(pac::Interrupt::TIMER_IRQ_0);
    }

    let mut display = PacedDisplay::new(MatrixDisplay::new(leds, BRIGHTNESS));
    animation::run(&mut Rainbow::new(TARGET_ROW), &mut display, &STOP);

    Ok(())
}

/// Holds every `present` back until the refresh alarm has opened the next slot.
struct PacedDisplay<D> {
    inner: D,
}

impl<D: DisplayDriver> PacedDisplay<D> {
    fn new(inner: D) -> Self {
        Self { inner }
    }
}

impl<D: DisplayDriver> DisplayDriver for PacedDisplay<D> {
    fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        self.inner.set_pixel(x, y, color);
    }

    fn present(&mut self) {
        while !ATOMIC_STATE.take_present_due() {
            cortex_m::asm::wfi();
        }
        self.inner.present();
    }
}

#[interrupt]
fn TIMER_IRQ_0() {
    ATOMIC_STATE.mark_present_due();
    let rescheduled = global_state::shared_state_interrupt_free(|state| {
        let result = state.alarm0_reschedule();
        state.alarm0_clear_interrupt();
        result
    });
    if let Some(Err(error)) = rescheduled {
        panic!("{}", error);
    }
}
