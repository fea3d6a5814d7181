use crate::api::{DEFAULT_FETCH_DELAY_MS, DEFAULT_PER_PAGE};
use crate::playback::{clamp_volume, DEFAULT_MAX_PLAYBACK_RATE, DEFAULT_SPEED_STEP, DEFAULT_VOLUME};
use crate::throttle::DEFAULT_THROTTLE_MS;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for settings storage on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "rustyreel.app_settings";

pub const DEFAULT_TITLE_MAX_CHARS: usize = 35;

/// App settings stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_playback_rate")]
    pub playback_rate: f64,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u32,
    #[serde(default = "default_scroll_throttle_ms")]
    pub scroll_throttle_ms: u32,
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
    #[serde(default = "default_speed_step")]
    pub speed_step: f64,
    #[serde(default = "default_max_playback_rate")]
    pub max_playback_rate: f64,
}

fn default_volume() -> f64 {
    DEFAULT_VOLUME
}

fn default_playback_rate() -> f64 {
    1.0
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_fetch_delay_ms() -> u32 {
    DEFAULT_FETCH_DELAY_MS
}

fn default_scroll_throttle_ms() -> u32 {
    DEFAULT_THROTTLE_MS
}

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

fn default_speed_step() -> f64 {
    DEFAULT_SPEED_STEP
}

fn default_max_playback_rate() -> f64 {
    DEFAULT_MAX_PLAYBACK_RATE
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            playback_rate: default_playback_rate(),
            per_page: default_per_page(),
            fetch_delay_ms: default_fetch_delay_ms(),
            scroll_throttle_ms: default_scroll_throttle_ms(),
            title_max_chars: default_title_max_chars(),
            speed_step: default_speed_step(),
            max_playback_rate: default_max_playback_rate(),
        }
    }
}

fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl AppSettings {
    /// Replaces out-of-range values with usable ones.
    pub fn sanitized(mut self) -> Self {
        self.volume = clamp_volume(self.volume);
        self.max_playback_rate = positive_or(self.max_playback_rate, DEFAULT_MAX_PLAYBACK_RATE);
        self.speed_step = positive_or(self.speed_step, DEFAULT_SPEED_STEP);
        self.playback_rate = positive_or(self.playback_rate, 1.0);
        if self.playback_rate > self.max_playback_rate {
            self.playback_rate = 1.0;
        }
        self.per_page = self.per_page.max(1);
        self.title_max_chars = self.title_max_chars.max(1);
        self
    }
}

// Settings storage for native platforms, kept in a small SQLite file.

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;
    create_schema(&conn)
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;
    write_settings(&conn, &settings)
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    let conn = get_db_connection()?;
    read_settings(&conn)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, StorageError> {
    match LocalStorage::get::<AppSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings.sanitized()),
        Err(_) => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_schema(conn: &rusqlite::Connection) -> Result<(), DbError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn write_settings(conn: &rusqlite::Connection, settings: &AppSettings) -> Result<(), DbError> {
    let settings_json = serde_json::to_string(settings)?;
    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('app_settings', ?1)",
        [&settings_json],
    )?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_settings(conn: &rusqlite::Connection) -> Result<AppSettings, DbError> {
    use rusqlite::OptionalExtension;

    let json: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key = 'app_settings'",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match json {
        Some(json) => Ok(serde_json::from_str::<AppSettings>(&json)?.sanitized()),
        None => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let db_path = data_dir().join("rustyreel.db");
    let conn = rusqlite::Connection::open(&db_path)?;
    create_schema(&conn)?;
    Ok(conn)
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    let fallback = std::path::PathBuf::from(".rustyreel");
    let data_dir = dirs::data_local_dir()
        .map(|dir| dir.join("rustyreel"))
        .unwrap_or(fallback);
    if let Err(err) = std::fs::create_dir_all(&data_dir) {
        tracing::warn!("Failed to create data directory {}: {err}", data_dir.display());
    }
    data_dir
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn memory_db() -> rusqlite::Connection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn missing_row_gives_defaults() {
        let conn = memory_db();
        assert_eq!(read_settings(&conn).unwrap(), AppSettings::default());
    }

    #[test]
    fn settings_survive_a_write() {
        let conn = memory_db();
        let settings = AppSettings {
            volume: 0.3,
            playback_rate: 2.0,
            ..Default::default()
        };
        write_settings(&conn, &settings).unwrap();
        write_settings(&conn, &settings).unwrap();
        assert_eq!(read_settings(&conn).unwrap(), settings);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"volume":0.5}"#).unwrap();
        assert_eq!(settings.volume, 0.5);
        assert_eq!(settings.per_page, 5);
        assert_eq!(settings.fetch_delay_ms, 150);
        assert_eq!(settings.scroll_throttle_ms, 250);
        assert_eq!(settings.title_max_chars, 35);
    }

    #[test]
    fn corrupt_row_is_an_error() {
        let conn = memory_db();
        conn.execute(
            "INSERT INTO settings (key, value) VALUES ('app_settings', 'oops')",
            [],
        )
        .unwrap();
        assert!(matches!(read_settings(&conn), Err(DbError::Json(_))));
    }

    #[test]
    fn sanitizing_repairs_bad_values() {
        let settings = AppSettings {
            volume: 3.0,
            playback_rate: 9.0,
            per_page: 0,
            speed_step: -1.0,
            max_playback_rate: f64::NAN,
            title_max_chars: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.volume, 1.0);
        assert_eq!(settings.playback_rate, 1.0);
        assert_eq!(settings.per_page, 1);
        assert_eq!(settings.speed_step, DEFAULT_SPEED_STEP);
        assert_eq!(settings.max_playback_rate, DEFAULT_MAX_PLAYBACK_RATE);
        assert_eq!(settings.title_max_chars, 1);
    }
}
