use crate::models::{day_key, DayKey, Event};
use chrono::Local;

pub trait Clock: Send + Sync {
    fn now(&self) -> Event;

    fn today(&self) -> DayKey {
        day_key(&self.now())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Event {
        Local::now().fixed_offset()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Event);

impl Clock for FixedClock {
    fn now(&self) -> Event {
        self.0
    }
}
