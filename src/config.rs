use std::env;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3001";
pub const DEFAULT_DB_FILE: &str = "db.json";
pub const DEFAULT_INITIAL_DB_FILE: &str = "db.initial.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: String,
    pub db_file: PathBuf,
    pub initial_db_file: PathBuf,
}

impl Config {
    /// Reads `ADMOCK_BIND`, `DB_JSON_FILE` and `DB_INITIAL_FILE`, falling
    /// back to the defaults for anything unset or empty.
    pub fn from_env() -> Config {
        Config {
            bind_address: env_string("ADMOCK_BIND")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            db_file: env_string("DB_JSON_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            initial_db_file: env_string("DB_INITIAL_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INITIAL_DB_FILE)),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            db_file: PathBuf::from(DEFAULT_DB_FILE),
            initial_db_file: PathBuf::from(DEFAULT_INITIAL_DB_FILE),
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
