use std::{env, num::NonZeroU32, path::PathBuf, str::FromStr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/events.json";
pub const DEFAULT_AVERAGE_DAYS: u32 = 7;
pub const DEFAULT_RECENT_DAYS: usize = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub average_days: NonZeroU32,
    pub recent_days: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            average_days: NonZeroU32::new(DEFAULT_AVERAGE_DAYS).unwrap_or(NonZeroU32::MIN),
            recent_days: DEFAULT_RECENT_DAYS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parsed(&lookup, "PORT").unwrap_or(defaults.port),
            data_path: lookup("APP_DATA_PATH")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            average_days: parsed(&lookup, "APP_AVERAGE_DAYS").unwrap_or(defaults.average_days),
            recent_days: parsed(&lookup, "APP_RECENT_DAYS").unwrap_or(defaults.recent_days),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse().ok())
}
