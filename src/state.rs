use crate::config::Config;
use crate::tracker::Tracker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(config: Config, tracker: Tracker) -> Self {
        Self {
            config: Arc::new(config),
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
