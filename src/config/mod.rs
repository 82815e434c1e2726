use crate::domain::Dialect;
use crate::errors::{FeedError, FeedResult};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dialects: Vec<Dialect>,
    pub pretty: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialects: Dialect::ALL.to_vec(),
            pretty: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeedResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> FeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(order) = lookup("FEEDJSON_DIALECTS") {
            config.dialects = parse_dialects(&order)?;
        }

        if let Some(pretty) = lookup("FEEDJSON_PRETTY") {
            config.pretty = parse_bool(&pretty).ok_or_else(|| {
                FeedError::Config(format!("FEEDJSON_PRETTY must be true or false, got '{}'", pretty))
            })?;
        }

        if let Some(filter) = lookup("FEEDJSON_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}

pub fn parse_dialects(value: &str) -> FeedResult<Vec<Dialect>> {
    let dialects = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| name.parse::<Dialect>().map_err(|_| FeedError::UnknownDialect(name.to_string())))
        .collect::<FeedResult<Vec<_>>>()?;

    if dialects.is_empty() {
        return Err(FeedError::Config("FEEDJSON_DIALECTS lists no dialects".to_string()));
    }

    Ok(dialects)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
