use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub content: ContentConfig,
    pub share: ShareConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let state_path = non_empty_path("APP_STATE_PATH", ".persona-scale/state.json")?;
        let export_dir = non_empty_path("APP_EXPORT_DIR", ".")?;
        let content_path = env::var("APP_CONTENT_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let base_url =
            env::var("APP_SHARE_BASE_URL").unwrap_or_else(|_| "http://localhost/".to_string());
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidShareBaseUrl { value: base_url });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig {
                state_path,
                export_dir,
            },
            content: ContentConfig { path: content_path },
            share: ShareConfig { base_url },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_path(key: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyPath { key }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Where the quiz snapshot and exported files live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub state_path: PathBuf,
    pub export_dir: PathBuf,
}

/// Optional JSON file replacing the built-in result copy.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub base_url: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyPath { key: &'static str },
    InvalidShareBaseUrl { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPath { key } => write!(f, "{} must not be empty when set", key),
            ConfigError::InvalidShareBaseUrl { value } => write!(
                f,
                "APP_SHARE_BASE_URL must be an http(s) URL, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
