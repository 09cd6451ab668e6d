use std::env;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_REPORT_PATH: &str = "SME_Cyber_Assessment_Report.txt";
pub const DEFAULT_LIST_CAP: usize = 12;
const MAX_LIST_CAP: usize = 100;

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

    /// Log level used when `APP_LOG_LEVEL` is unset. Tests stay quiet.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Test => "warn",
            Self::Production => "info",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| environment.default_log_level().to_string());

        let report_path = env::var("APP_REPORT_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string());

        let submission_log = env::var("APP_SUBMISSION_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let list_cap = match env::var("APP_REPORT_LIST_CAP") {
            Ok(raw) => parse_list_cap(&raw)?,
            Err(_) => DEFAULT_LIST_CAP,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            export: ExportConfig {
                report_path: PathBuf::from(report_path),
                submission_log,
                list_cap,
            },
        })
    }
}

fn parse_list_cap(raw: &str) -> Result<usize, ConfigError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidListCap(raw.to_string()))?;
    if (1..=MAX_LIST_CAP).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidListCap(raw.to_string()))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where reports and submission records land, and how long exported lists get.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub report_path: PathBuf,
    pub submission_log: Option<PathBuf>,
    pub list_cap: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidListCap(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidListCap(value) => write!(
                f,
                "APP_REPORT_LIST_CAP must be an integer between 1 and {MAX_LIST_CAP} \
                 (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_REPORT_PATH");
        env::remove_var("APP_SUBMISSION_LOG");
        env::remove_var("APP_REPORT_LIST_CAP");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.export.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
        assert!(config.export.submission_log.is_none());
        assert_eq!(config.export.list_cap, DEFAULT_LIST_CAP);
    }

    #[test]
    fn empty_submission_log_counts_as_unset() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_SUBMISSION_LOG", "  ");
        env::set_var("APP_REPORT_LIST_CAP", " 5 ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.export.submission_log.is_none());
        assert_eq!(config.export.list_cap, 5);
        reset_env();
    }

    #[test]
    fn explicit_log_level_overrides_the_environment_default() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "info");

        env::set_var("APP_LOG_LEVEL", "trace");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.telemetry.log_level, "trace");
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_list_cap() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for raw in ["0", "101", "twelve"] {
            env::set_var("APP_REPORT_LIST_CAP", raw);
            let err = AppConfig::load().expect_err("cap rejected");
            assert!(matches!(err, ConfigError::InvalidListCap(ref value) if value == raw));
        }
        reset_env();
    }
}
