use crate::errors::AppError;
use crate::event_log::EventLog;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::fs;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<EventLog>, AppError>;

    async fn save(&self, log: &EventLog) -> Result<(), AppError>;
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    async fn load(&self) -> Result<Option<EventLog>, AppError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn save(&self, log: &EventLog) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec_pretty(log)?;
        fs::write(&self.path, payload).await?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<EventLog>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(log: EventLog) -> Self {
        Self {
            saved: Mutex::new(Some(log)),
        }
    }

    pub fn saved(&self) -> Option<EventLog> {
        self.saved.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn load(&self) -> Result<Option<EventLog>, AppError> {
        Ok(self.saved())
    }

    async fn save(&self, log: &EventLog) -> Result<(), AppError> {
        let mut guard = self
            .saved
            .lock()
            .map_err(|err| AppError::internal(std::io::Error::other(err.to_string())))?;
        *guard = Some(log.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn sample() -> EventLog {
        EventLog::from_events(vec![
            DateTime::parse_from_rfc3339("2026-04-02T08:00:00+02:00").unwrap(),
            DateTime::parse_from_rfc3339("2026-04-01T19:45:10+02:00").unwrap(),
        ])
    }

    #[tokio::test]
    async fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("events.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, b"{\"events\": [\"not a timestamp\"]}").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn save_creates_parent_dirs_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("events.json");
        let store = JsonFileStore::new(&path);

        store.save(&EventLog::new()).await.unwrap();
        store.save(&sample()).await.unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["events"].as_array().map(Vec::len), Some(2));
        assert_eq!(store.load().await.unwrap(), Some(sample()));
    }

    #[tokio::test]
    async fn memory_store_keeps_last_save() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        store.save(&sample()).await.unwrap();
        assert_eq!(store.saved(), Some(sample()));
    }
}
