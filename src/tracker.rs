use crate::chart::{render_cumulative, SvgSurface};
use crate::clock::Clock;
use crate::errors::AppError;
use crate::event_log::EventLog;
use crate::models::{DayKey, Event, SeriesResponse, Summary};
use crate::stats::{cumulative_series, daily_series, day_range, rolling_average, summarize};
use crate::storage::EventStore;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct Tracker {
    log: EventLog,
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl Tracker {
    /// Restores the log from `store`. Missing or unreadable data starts empty.
    pub async fn load(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        let log = match store.load().await {
            Ok(Some(log)) => {
                info!(events = log.len(), "restored event log");
                log
            }
            Ok(None) => EventLog::new(),
            Err(err) => {
                error!("failed to load event log, starting empty: {}", err.message);
                EventLog::new()
            }
        };

        Self { log, store, clock }
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn today(&self) -> DayKey {
        self.clock.today()
    }

    pub async fn record(&mut self) -> Result<Event, AppError> {
        let event = self.clock.now();
        self.log.append(event);
        self.store.save(&self.log).await?;
        info!(total = self.log.len(), at = %event.to_rfc3339(), "recorded event");
        Ok(event)
    }

    pub fn summary(&self, recent_limit: usize) -> Summary {
        summarize(&self.log, self.today(), recent_limit)
    }

    pub fn rolling_average(&self, days: NonZeroU32) -> f64 {
        rolling_average(&self.log, days, self.today())
    }

    pub fn series(&self) -> SeriesResponse {
        let range = day_range(&self.log);
        SeriesResponse {
            first_day: range.map(|(first, _)| first.to_string()),
            last_day: range.map(|(_, last)| last.to_string()),
            daily: daily_series(&self.log),
            cumulative: cumulative_series(&self.log),
        }
    }

    pub fn chart_svg(&self) -> String {
        let series = cumulative_series(&self.log);
        debug!(points = series.len(), "rendering chart");
        let mut surface = SvgSurface::default();
        render_cumulative(&mut surface, &series);
        surface.to_svg()
    }
}
