use crate::event_log::EventLog;
use crate::models::{day_key, DayCount, DayKey, Summary};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::num::NonZeroU32;

pub type DayCounts = BTreeMap<DayKey, u64>;

pub fn build_day_counts(log: &EventLog) -> DayCounts {
    let mut counts = DayCounts::new();
    for event in log.all() {
        *counts.entry(day_key(event)).or_default() += 1;
    }
    counts
}

/// The divisor is always `days`, including days before the first event.
pub fn rolling_average(log: &EventLog, days: NonZeroU32, reference_day: DayKey) -> f64 {
    let span = Duration::days(i64::from(days.get()) - 1);
    let start = reference_day
        .checked_sub_signed(span)
        .unwrap_or(NaiveDate::MIN);

    let sum: u64 = build_day_counts(log)
        .range(start..=reference_day)
        .map(|(_, count)| *count)
        .sum();

    sum as f64 / f64::from(days.get())
}

pub fn daily_series(log: &EventLog) -> Vec<u64> {
    let Some((first, last)) = day_range(log) else {
        return Vec::new();
    };

    let len = (last - first).num_days() as usize + 1;
    let mut counts = vec![0u64; len];
    for event in log.all() {
        let index = (day_key(event) - first).num_days() as usize;
        counts[index] += 1;
    }
    counts
}

pub fn cumulative_series(log: &EventLog) -> Vec<u64> {
    daily_series(log)
        .into_iter()
        .scan(0u64, |running, count| {
            *running += count;
            Some(*running)
        })
        .collect()
}

pub fn day_range(log: &EventLog) -> Option<(DayKey, DayKey)> {
    let mut sorted: Vec<DayKey> = log.all().iter().map(day_key).collect();
    sorted.sort_unstable();
    Some((*sorted.first()?, *sorted.last()?))
}

pub fn recent_days(counts: &DayCounts, limit: usize) -> Vec<DayCount> {
    counts
        .iter()
        .rev()
        .take(limit)
        .map(|(day, count)| DayCount {
            date: day.to_string(),
            count: *count,
        })
        .collect()
}

pub fn format_listing(days: &[DayCount]) -> String {
    if days.is_empty() {
        return "no data yet".to_string();
    }

    days.iter()
        .map(|day| format!("{} => {}\n", day.date, day.count))
        .collect()
}

pub fn summarize(log: &EventLog, today: DayKey, recent_limit: usize) -> Summary {
    let recent = recent_days(&build_day_counts(log), recent_limit);
    Summary {
        total: log.len() as u64,
        today: log.count_on_day(today),
        listing: format_listing(&recent),
        recent_days: recent,
    }
}
