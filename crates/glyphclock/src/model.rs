use chrono::{Local, NaiveDateTime};

/// Characters the clock can display. Order matches the cells of the font
/// strip, left to right.
pub const CLOCK_CHARSET: &str = "0123456789:-";

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formatted text for one displayed instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSnapshot {
    /// `HH:MM:SS`, 24-hour.
    pub time_text: String,
    /// `YYYY-MM-DD`.
    pub date_text: String,
}

/// Source of local calendar time.
pub trait WallClock {
    fn now(&self) -> NaiveDateTime;
}

/// The host's local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalWallClock;

impl WallClock for LocalWallClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedWallClock(pub NaiveDateTime);

impl WallClock for FixedWallClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Samples a [`WallClock`] into display strings.
#[derive(Debug, Default)]
pub struct ClockModel<W> {
    wall: W,
}

impl<W: WallClock> ClockModel<W> {
    pub fn new(wall: W) -> Self {
        Self { wall }
    }

    pub fn sample(&self) -> ClockSnapshot {
        snapshot_at(self.wall.now())
    }
}

/// Formats `at` as time and date text.
pub fn snapshot_at(at: NaiveDateTime) -> ClockSnapshot {
    ClockSnapshot {
        time_text: at.format(TIME_FORMAT).to_string(),
        date_text: at.format(DATE_FORMAT).to_string(),
    }
}
