/// Everything that can go wrong while bringing the board up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("peripherals were already taken")]
    PeripheralsTaken,

    #[error("clock and PLL initialisation failed")]
    Clocks,

    #[error("timer alarm 0 is not available")]
    AlarmUnavailable,

    #[error("could not schedule the refresh alarm")]
    ScheduleAlarm,
}
