use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use hal::timer::{Alarm, Alarm0};
use rp_pico::hal;

use crate::error::Error;

use fugit::MicrosDurationU32;
use portable_atomic::{AtomicBool, Ordering};

pub static SHARED_STATE: Mutex<RefCell<Option<SharedState>>> = Mutex::new(RefCell::new(None));
pub static ATOMIC_STATE: AtomicState = AtomicState::new();

pub fn shared_state_interrupt_free<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut SharedState) -> R,
{
    cortex_m::interrupt::free(|cs| SHARED_STATE.borrow(cs).borrow_mut().as_mut().map(f))
}

pub struct AtomicState {
    present_due: AtomicBool,
}

impl AtomicState {
    pub const fn new() -> Self {
        Self {
            present_due: AtomicBool::new(false),
        }
    }

    pub fn mark_present_due(&self) {
        self.present_due.store(true, Ordering::Release);
    }

    /// Returns whether a refresh slot was pending, consuming it.
    pub fn take_present_due(&self) -> bool {
        self.present_due.swap(false, Ordering::AcqRel)
    }
}

pub struct SharedState {
    pub alarm0: Alarm0,
    pub present_interval: MicrosDurationU32,
}

impl SharedState {
    pub fn alarm0_reschedule(&mut self) -> Result<(), Error> {
        self.alarm0
            .schedule(self.present_interval)
            .map_err(|_| Error::ScheduleAlarm)
    }

    pub fn alarm0_clear_interrupt(&mut self) {
        self.alarm0.clear_interrupt();
    }
}
