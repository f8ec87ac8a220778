//! 日志初始化：终端输出与按天滚动的日志文件

use anyhow::{Context, Result};
use std::path::Path;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LogConfig;

/// 解析默认日志级别，verbose时至少为debug
pub fn default_level(config: &LogConfig, verbose: bool) -> Result<LevelFilter> {
    let level: LevelFilter = config
        .level
        .parse()
        .context(format!("Invalid log level: {}", config.level))?;
    if verbose && level < LevelFilter::DEBUG {
        return Ok(LevelFilter::DEBUG);
    }
    Ok(level)
}

/// 安装全局subscriber，返回的guard需要在main中持有到进程结束
pub fn init(config: &LogConfig, logs_path: Option<&Path>, verbose: bool) -> Result<Option<WorkerGuard>> {
    let level = default_level(config, verbose)?;
    let env_filter = || {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    match logs_path {
        Some(dir) => {
            let file_appender = rolling::daily(dir, &config.file_prefix);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter());

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(stderr_layer)
                .try_init()
                .context("Failed to install tracing subscriber")?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let config = LogConfig::default();
        assert_eq!(default_level(&config, false).unwrap(), LevelFilter::INFO);
        assert_eq!(default_level(&config, true).unwrap(), LevelFilter::DEBUG);

        let trace = LogConfig {
            level: "trace".to_string(),
            ..Default::default()
        };
        assert_eq!(default_level(&trace, true).unwrap(), LevelFilter::TRACE);

        let invalid = LogConfig {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert!(default_level(&invalid, false).is_err());
    }
}
