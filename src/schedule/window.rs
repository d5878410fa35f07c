use chrono::{Days, NaiveDate};

/// Walks a fixed number of calendar days forward from a start date
pub struct DayWindow {
    start: NaiveDate,
    offset: u32,
    horizon_days: u32,
}

impl DayWindow {
    pub fn new(start: NaiveDate, horizon_days: u32) -> Self {
        Self {
            start,
            offset: 0,
            horizon_days,
        }
    }

    pub fn current_day(&self) -> Option<NaiveDate> {
        self.start.checked_add_days(Days::new(self.offset as u64))
    }

    pub fn has_reached_max(&self) -> bool {
        self.offset >= self.horizon_days
    }

    pub fn advance(&mut self) {
        self.offset += 1;
    }
}
