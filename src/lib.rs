pub mod app;
pub mod chart;
pub mod clock;
pub mod config;
pub mod errors;
pub mod event_log;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use tracker::Tracker;
