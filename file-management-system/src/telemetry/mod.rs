pub mod config;
pub use self::config::*;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{Layer, Registry};

/// Install the logging subscriber described by `config`.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let mut filter_builder = EnvFilter::builder();
    if config.level_filter_env.ne(&String::default()) {
        filter_builder = filter_builder.with_env_var(config.level_filter_env.as_str());
    }
    let filter = filter_builder
        .with_default_directive(config.max_level.clone().into())
        .parse_lossy(config.level_filter.as_str());
    let console = {
        let config = &config.console;
        if config.enable {
            let enable_debug_logging = config.enable_debug_logging;
            let mut filter_builder = EnvFilter::builder();
            if config.level_filter_env.ne(&String::default()) {
                filter_builder = filter_builder.with_env_var(config.level_filter_env.as_str());
            }
            let filter = filter_builder
                .with_default_directive(config.max_level.clone().into())
                .parse_lossy(config.level_filter.as_str());
            Some(
                tracing_subscriber::fmt::layer()
                    .with_file(enable_debug_logging)
                    .with_line_number(enable_debug_logging)
                    .with_thread_ids(enable_debug_logging)
                    .with_target(enable_debug_logging)
                    .with_filter(filter),
            )
        } else {
            None
        }
    };
    let file = {
        let config = &config.file;
        if config.enable {
            let enable_debug_logging = config.enable_debug_logging;
            let file_appender = RollingFileAppender::new(
                config.rolling_time.clone().into(),
                &config.path,
                &config.prefix,
            );
            let mut filter_builder = EnvFilter::builder();
            if config.level_filter_env.ne(&String::default()) {
                filter_builder = filter_builder.with_env_var(config.level_filter_env.as_str());
            }
            let filter = filter_builder
                .with_default_directive(config.max_level.clone().into())
                .parse_lossy(config.level_filter.as_str());
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_file(enable_debug_logging)
                    .with_line_number(enable_debug_logging)
                    .with_thread_ids(enable_debug_logging)
                    .with_target(enable_debug_logging)
                    .with_filter(filter),
            )
        } else {
            None
        }
    };
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}
