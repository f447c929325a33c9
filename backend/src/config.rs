//! Process configuration, resolved once at startup from the environment.
//!
//! Every value has a development default so `cargo run` works out of the box;
//! missing variables are logged at info level, never fatal.

use log::info;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// TCP port the HTTP server binds on.
    pub port: u16,
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Root directory of the stored lesson PDFs. The file resolver never
    /// serves anything outside this tree.
    pub storage_root: PathBuf,
    /// Seconds a session cookie stays valid after login.
    pub session_ttl_secs: i64,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            port: load_or("PORT", "8080"),
            db_path: PathBuf::from(load_or::<String>("DB_PATH", "lessons.sqlite")),
            storage_root: PathBuf::from(load_or::<String>("STORAGE_ROOT", "pdfs")),
            session_ttl_secs: load_or("SESSION_TTL_SECS", "86400"),
        }
    }
}

fn load_or<T: std::str::FromStr>(key: &str, default: &str) -> T
where
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{} not set, using default: {}", key, default);
        default.to_string()
    });
    raw.parse().unwrap_or_else(|e| {
        info!("invalid {} value ({}), using default: {}", key, e, default);
        default.parse().ok().expect("default value must parse")
    })
}
