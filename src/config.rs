//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `GUARDIAN_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::BackendConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10_000
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl BackendSettings {
    /// Client configuration for these settings
    pub fn client_config(&self) -> BackendConfig {
        BackendConfig {
            base_url: self.base_url.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

/// Dashboard refresh configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval() -> u64 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

impl DashboardConfig {
    /// Refresh interval as a duration, never shorter than one second
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

/// Stub API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address string for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Log file for the terminal dashboard, which cannot log to stdout
    pub fn tui_log_path(&self) -> PathBuf {
        match &self.file {
            Some(file) => PathBuf::from(file),
            None => dirs::data_local_dir()
                .map(|p| p.join("guardian"))
                .unwrap_or_else(|| PathBuf::from("."))
                .join("guardian.log"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Nothing is logged here; the returned [`ConfigOrigin`] is reported
    /// once a subscriber is installed.
    pub fn load_default() -> (Self, ConfigOrigin) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("guardian").join("config.toml")),
            Some(PathBuf::from("/etc/guardian/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first candidate that exists and parses, falling back to
    /// defaults with environment overrides
    pub fn load_first(candidates: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut origin = ConfigOrigin::default();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    origin.path = Some(path.clone());
                    return (config, origin);
                }
                Err(e) => origin.rejected.push((path.clone(), e.to_string())),
            }
        }

        (Self::from_env(), origin)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Numeric values that fail to parse are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Backend overrides
        if let Some(url) = lookup("GUARDIAN_API_URL") {
            self.backend.base_url = url;
        }
        if let Some(timeout) = lookup("GUARDIAN_REQUEST_TIMEOUT_MS") {
            if let Ok(ms) = timeout.parse() {
                self.backend.request_timeout_ms = ms;
            }
        }

        // Dashboard overrides
        if let Some(secs) = lookup("GUARDIAN_REFRESH_SECS") {
            if let Ok(s) = secs.parse() {
                self.dashboard.refresh_interval_secs = s;
            }
        }

        // Server overrides
        if let Some(host) = lookup("GUARDIAN_SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GUARDIAN_SERVER_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("GUARDIAN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("GUARDIAN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOrigin {
    /// File the settings were read from; `None` means built-in defaults
    pub path: Option<PathBuf>,
    /// Candidate files that exist but failed to load, with the reason
    pub rejected: Vec<(PathBuf, String)>,
}

impl ConfigOrigin {
    /// Origin of a config file named on the command line
    pub fn explicit(path: &Path) -> Self {
        Self {
            path: Some(path.to_path_buf()),
            rejected: Vec::new(),
        }
    }

    /// Emit the load events. Call after logging is initialised.
    pub fn log(&self) {
        for (path, error) in &self.rejected {
            tracing::warn!("Failed to load config from {:?}: {}", path, error);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# GuardianOS Dashboard Configuration
#
# Environment variables override these settings:
# - GUARDIAN_API_URL
# - GUARDIAN_REQUEST_TIMEOUT_MS
# - GUARDIAN_REFRESH_SECS
# - GUARDIAN_SERVER_HOST
# - GUARDIAN_SERVER_PORT
# - GUARDIAN_LOG_LEVEL
# - GUARDIAN_LOG_FORMAT

[backend]
# Base URL of the GuardianOS backend API
base_url = "http://localhost:8000"

# Per-request timeout (ms)
request_timeout_ms = 10000

[dashboard]
# How often the dashboard refreshes its statistics (seconds)
refresh_interval_secs = 30

[server]
# Stub API bind host
host = "127.0.0.1"

# Stub API bind port
port = 8000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path (the terminal dashboard always logs to a file)
# file = "/var/log/guardian/guardian.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, "http://localhost:8000");
        assert_eq!(config.backend.request_timeout_ms, 10_000);
        assert_eq!(config.dashboard.refresh_interval_secs, 30);
        assert_eq!(config.server.addr(), "127.0.0.1:8000");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.backend.base_url, defaults.backend.base_url);
        assert_eq!(
            config.dashboard.refresh_interval_secs,
            defaults.dashboard.refresh_interval_secs
        );
        assert_eq!(config.server.port, defaults.server.port);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nbase_url = \"http://api.internal:9000\"\n\n[dashboard]\nrefresh_interval_secs = 5"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.base_url, "http://api.internal:9000");
        assert_eq!(config.backend.request_timeout_ms, 10_000);
        assert_eq!(config.dashboard.refresh_interval(), Duration::from_secs(5));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dashboard\nrefresh_interval_secs = ").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_first_skips_broken_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[server\nport = ").unwrap();
        std::fs::write(&good, "[server]\nport = 9200\n").unwrap();

        let candidates = vec![dir.path().join("absent.toml"), broken.clone(), good.clone()];
        let (config, origin) = Config::load_first(&candidates);

        assert_eq!(config.server.port, 9200);
        assert_eq!(origin.path, Some(good));
        assert_eq!(origin.rejected.len(), 1);
        assert_eq!(origin.rejected[0].0, broken);
    }

    #[test]
    fn test_load_first_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, origin) = Config::load_first(&[dir.path().join("absent.toml")]);

        assert_eq!(config.dashboard.refresh_interval_secs, 30);
        assert_eq!(origin, ConfigOrigin::default());
    }

    #[test]
    fn test_origin_events_reach_installed_subscriber() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let origin = ConfigOrigin {
            path: Some(PathBuf::from("/etc/guardian/config.toml")),
            rejected: vec![(PathBuf::from("./config.toml"), "bad toml".to_string())],
        };
        tracing::subscriber::with_default(subscriber, || origin.log());

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Failed to load config from \"./config.toml\": bad toml"));
        assert!(output.contains("Loaded config from \"/etc/guardian/config.toml\""));
    }

    #[test]
    fn test_overrides_apply() {
        let env: HashMap<&str, &str> = [
            ("GUARDIAN_API_URL", "http://10.0.0.5:8000"),
            ("GUARDIAN_REFRESH_SECS", "10"),
            ("GUARDIAN_REQUEST_TIMEOUT_MS", "2500"),
            ("GUARDIAN_SERVER_HOST", "0.0.0.0"),
            ("GUARDIAN_SERVER_PORT", "9100"),
            ("GUARDIAN_LOG_LEVEL", "debug"),
            ("GUARDIAN_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.backend.request_timeout_ms, 2500);
        assert_eq!(config.dashboard.refresh_interval_secs, 10);
        assert_eq!(config.server.addr(), "0.0.0.0:9100");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_unparseable_numeric_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "GUARDIAN_REFRESH_SECS" => Some("soon".to_string()),
            "GUARDIAN_SERVER_PORT" => Some("99999".to_string()),
            _ => None,
        });

        assert_eq!(config.dashboard.refresh_interval_secs, 30);
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_zero_refresh_interval_clamped() {
        let config = DashboardConfig {
            refresh_interval_secs: 0,
        };
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_tui_log_path_prefers_configured_file() {
        let logging = LoggingConfig {
            file: Some("/tmp/guardian-test.log".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(logging.tui_log_path(), PathBuf::from("/tmp/guardian-test.log"));

        let default_path = LoggingConfig::default().tui_log_path();
        assert!(default_path.ends_with("guardian.log"));
    }
}
