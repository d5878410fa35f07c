mod locator;
mod window;

pub use locator::ScheduleLocator;
pub use window::DayWindow;
