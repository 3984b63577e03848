use crate::models::{day_key, DayKey, Event};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn count_on_day(&self, day: DayKey) -> u64 {
        self.events.iter().filter(|event| day_key(event) == day).count() as u64
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};

    fn at(ts: &str) -> Event {
        DateTime::parse_from_rfc3339(ts).unwrap()
    }

    fn local(day: u32, hour: u32, min: u32) -> Event {
        Local
            .with_ymd_and_hms(2026, 3, day, hour, min, 0)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut log = EventLog::new();
        log.append(at("2026-03-02T10:00:00+00:00"));
        log.append(at("2026-03-01T10:00:00+00:00"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0], at("2026-03-02T10:00:00+00:00"));
        assert_eq!(log.all()[1], at("2026-03-01T10:00:00+00:00"));
    }

    #[test]
    fn count_on_day_uses_local_calendar_day() {
        let log = EventLog::from_events(vec![
            local(1, 23, 30),
            local(1, 6, 10),
            local(1, 12, 0),
            local(2, 8, 0),
        ]);

        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(log.count_on_day(day), 3);
        assert_eq!(log.count_on_day(day.succ_opt().unwrap()), 1);
        assert_eq!(log.count_on_day(day.pred_opt().unwrap()), 0);
    }

    #[test]
    fn same_instant_in_any_offset_lands_on_one_day() {
        let instant = local(1, 23, 30);
        let log = EventLog::from_events(vec![
            instant,
            instant.with_timezone(&Utc).fixed_offset(),
            instant.with_timezone(&FixedOffset::east_opt(14 * 3600).unwrap()),
            instant.with_timezone(&FixedOffset::west_opt(12 * 3600).unwrap()),
        ]);

        let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(log.count_on_day(day), 4);
    }

    #[test]
    fn duplicate_events_are_kept() {
        let mut log = EventLog::new();
        let event = at("2026-03-01T10:00:00+00:00");
        log.append(event);
        log.append(event);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn reads_persisted_layout() {
        let raw = r#"{"events": ["2026-03-01T10:00:00.000Z", "2026-02-28T09:30:00+01:00"]}"#;
        let log: EventLog = serde_json::from_str(raw).unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log.all()[0], at("2026-03-01T10:00:00+00:00"));

        let value = serde_json::to_value(&log).unwrap();
        let events = value["events"].as_array().expect("events array");
        assert_eq!(events.len(), 2);
        assert!(events[1].as_str().unwrap().starts_with("2026-02-28T09:30:00"));
    }
}
