use serde::Deserialize;
use tracing::metadata::LevelFilter;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::Directive;

/// Logging configuration.
#[derive(Deserialize, Clone, Debug)]
pub struct TelemetryConfig {
    /// Master switch.
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Global filter level.
    #[serde(default = "Default::default")]
    pub max_level: LoggingLevel,
    /// Global custom filter directives.
    #[serde(default = "Default::default")]
    pub level_filter: String,
    /// Environment variable the directives may also come from.
    #[serde(default = "Default::default")]
    pub level_filter_env: String,
    /// Console output settings.
    #[serde(default = "Default::default")]
    pub console: ConsoleConfig,
    /// File output settings.
    #[serde(default = "Default::default")]
    pub file: FileConfig,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
            console: Default::default(),
            file: Default::default(),
        }
    }
}

/// Log level.
#[derive(Default, Deserialize, Clone, Debug)]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
    Off,
}

impl From<LoggingLevel> for LevelFilter {
    fn from(val: LoggingLevel) -> Self {
        match val {
            LoggingLevel::Error => LevelFilter::ERROR,
            LoggingLevel::Warn => LevelFilter::WARN,
            LoggingLevel::Info => LevelFilter::INFO,
            LoggingLevel::Debug => LevelFilter::DEBUG,
            LoggingLevel::Trace => LevelFilter::TRACE,
            LoggingLevel::Off => LevelFilter::OFF,
        }
    }
}

impl From<LoggingLevel> for Directive {
    fn from(val: LoggingLevel) -> Self {
        let level: LevelFilter = val.into();
        level.into()
    }
}

/// Console output configuration.
#[derive(Deserialize, Clone, Debug)]
pub struct ConsoleConfig {
    /// Enable console output.
    #[serde(default = "default_enabled")]
    pub enable: bool,
    /// Include file, line number and thread ids.
    #[serde(default = "Default::default")]
    pub enable_debug_logging: bool,
    /// Filter level.
    #[serde(default = "Default::default")]
    pub max_level: LoggingLevel,
    /// Custom filter directives.
    #[serde(default = "Default::default")]
    pub level_filter: String,
    /// Environment variable the directives may also come from.
    #[serde(default = "Default::default")]
    pub level_filter_env: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enable: default_enabled(),
            enable_debug_logging: Default::default(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
        }
    }
}

/// File output configuration.
#[derive(Deserialize, Clone, Debug)]
pub struct FileConfig {
    /// Enable file output.
    #[serde(default = "Default::default")]
    pub enable: bool,
    /// Include file, line number and thread ids.
    #[serde(default = "Default::default")]
    pub enable_debug_logging: bool,
    /// Filter level.
    #[serde(default = "Default::default")]
    pub max_level: LoggingLevel,
    /// Custom filter directives.
    #[serde(default = "Default::default")]
    pub level_filter: String,
    /// Environment variable the directives may also come from.
    #[serde(default = "Default::default")]
    pub level_filter_env: String,
    /// Log directory (default `./logs`).
    #[serde(default = "default_path")]
    pub path: String,
    /// Log file name, or rolling-write prefix (default `fms.log`).
    #[serde(default = "default_filename")]
    pub prefix: String,
    /// Rolling period; `Never` writes a single file.
    #[serde(default = "Default::default")]
    pub rolling_time: RotationLevel,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enable: Default::default(),
            enable_debug_logging: Default::default(),
            max_level: Default::default(),
            level_filter: Default::default(),
            level_filter_env: Default::default(),
            path: default_path(),
            prefix: default_filename(),
            rolling_time: Default::default(),
        }
    }
}

/// File rotation period.
#[derive(Default, Deserialize, Clone, Debug)]
pub enum RotationLevel {
    Daily,
    Hourly,
    Minutely,
    #[default]
    Never,
}

impl From<RotationLevel> for Rotation {
    fn from(val: RotationLevel) -> Self {
        match val {
            RotationLevel::Daily => Rotation::DAILY,
            RotationLevel::Hourly => Rotation::HOURLY,
            RotationLevel::Minutely => Rotation::MINUTELY,
            RotationLevel::Never => Rotation::NEVER,
        }
    }
}

fn default_enabled() -> bool {
    true
}
fn default_path() -> String {
    "./logs".to_string()
}
fn default_filename() -> String {
    "fms.log".to_string()
}
