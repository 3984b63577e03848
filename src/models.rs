use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub type Event = DateTime<FixedOffset>;

pub type DayKey = NaiveDate;

/// Calendar day of the instant on the local clock, whatever offset it was written with.
pub fn day_key(event: &Event) -> DayKey {
    event.with_timezone(&Local).date_naive()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total: u64,
    pub today: u64,
    pub recent_days: Vec<DayCount>,
    pub listing: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResponse {
    pub recorded_at: String,
    pub summary: Summary,
}

#[derive(Debug, Deserialize)]
pub struct AverageQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AverageResponse {
    pub days: u32,
    pub reference_day: String,
    pub average: f64,
    pub display: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub first_day: Option<String>,
    pub last_day: Option<String>,
    pub daily: Vec<u64>,
    pub cumulative: Vec<u64>,
}
