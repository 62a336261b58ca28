use std::env;
use std::fmt;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MOCK_USER_COUNT: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Size of the generated user fixture behind `GET /api/users`.
    pub mock_user_count: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            mock_user_count: DEFAULT_MOCK_USER_COUNT,
        }
    }
}

impl AppConfig {
    /// Read `BIND_ADDR` and `MOCK_USER_COUNT` from the process environment.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let mock_user_count = match lookup("MOCK_USER_COUNT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "MOCK_USER_COUNT",
                value: raw,
            })?,
            None => DEFAULT_MOCK_USER_COUNT,
        };

        Ok(AppConfig { bind_addr, mock_user_count })
    }
}
