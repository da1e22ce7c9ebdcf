use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (the connection target)
    #[serde(default = "default_db_path")]
    pub path: PathBuf,

    /// Maximum number of pooled connections
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("roster.db")
}

fn default_pool_size() -> u32 {
    4
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            pool_size: default_pool_size(),
        }
    }
}
