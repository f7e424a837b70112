use std::env;

const DEFAULT_DB_PORT: u16 = 3306;

/// Database credentials, read once at startup.
///
/// Missing values are left empty rather than rejected; a bad configuration
/// shows up as a connection failure on the first request.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_username: String,
    pub db_password: String,
    pub db_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            db_host: env::var("DB_HOST").unwrap_or_default(),
            db_port: env::var("DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT),
            db_username: env::var("DB_USERNAME").unwrap_or_default(),
            db_password: env::var("DB_PASSWORD").unwrap_or_default(),
            db_name: env::var("DB_NAME").unwrap_or_default(),
        }
    }
}
