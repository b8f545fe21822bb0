// Configuration for the documentation browser
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/spmdocs/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Write logs to rotating files in addition to the in-TUI buffer
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "spmdocs".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Section shown on startup; unknown names fall back to Overview
    pub start_section: String,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            start_section: "overview".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

/// On-disk shape of the config file. Every field is optional so a partial
/// file merges cleanly over the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct FileConfig {
    theme: Option<String>,
    start_section: Option<String>,
    logging: Option<FileLoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FileLoggingConfig {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("spmdocs").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist.
    /// Called during startup to help users discover configuration options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Use Config::default().to_toml() as single source of truth
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A broken config fails fast with a clear error instead of silently
    /// falling back to defaults while the user debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!("  {}", e);
                    eprintln!("  To reset: spmdocs config --reset");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::merge(file)
    }

    fn merge(file: FileConfig) -> Self {
        let defaults = Config::default();
        let file_logging = file.logging.unwrap_or_default();

        let theme = std::env::var("SPMDOCS_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let start_section = std::env::var("SPMDOCS_SECTION")
            .ok()
            .or(file.start_section)
            .unwrap_or(defaults.start_section);

        let logging = LoggingConfig {
            level: std::env::var("SPMDOCS_LOG")
                .ok()
                .or(file_logging.level)
                .unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or(defaults.logging.file_prefix),
        };

        Self {
            theme,
            start_section,
            logging,
        }
    }

    /// Render as a commented TOML template. Single source of truth for
    /// both `config --reset` and the first-run file.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# spmdocs configuration
# Delete this file to return to defaults.

# Theme: "auto", "dracula", "nord", "gruvbox"
theme = {theme:?}

# Section shown on startup: overview, code, deployment, dashboard,
# troubleshooting, multi-tenant, ci/cd
start_section = {start_section:?}

[logging]
# Log level: trace, debug, info, warn, error
level = {level:?}

# Also write logs to rotating daily files
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_prefix = {file_prefix:?}
"#,
            theme = self.theme,
            start_section = self.start_section,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            file_prefix = self.logging.file_prefix,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generated template must parse back. Catches TOML syntax drift
    /// when fields are added.
    #[test]
    fn test_default_template_round_trips() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let merged = Config::merge(parsed.unwrap());
        assert_eq!(merged.theme, config.theme);
        assert_eq!(merged.start_section, config.start_section);
        assert_eq!(merged.logging.level, config.logging.level);
        assert_eq!(merged.logging.file_enabled, config.logging.file_enabled);
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let file: FileConfig = toml::from_str(r#"theme = "nord""#).unwrap();
        let merged = Config::merge(file);
        assert_eq!(merged.theme, "nord");
        assert_eq!(merged.start_section, "overview");
        assert_eq!(merged.logging.level, "info");
    }

    #[test]
    fn test_nested_logging_table_parses() {
        let file: FileConfig = toml::from_str(
            r#"
start_section = "dashboard"

[logging]
level = "debug"
file_enabled = true
file_dir = "/tmp/spmdocs-logs"
"#,
        )
        .unwrap();
        let merged = Config::merge(file);
        assert_eq!(merged.start_section, "dashboard");
        assert_eq!(merged.logging.level, "debug");
        assert!(merged.logging.file_enabled);
        assert_eq!(merged.logging.file_dir, PathBuf::from("/tmp/spmdocs-logs"));
        assert_eq!(merged.logging.file_prefix, "spmdocs");
    }
}
