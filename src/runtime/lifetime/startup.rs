use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;

use crate::config::{ClientConfig, ConfigOverrides};
use crate::interfaces::cli::CliError;
use crate::system::logging::init_logging;

/// Everything a view command needs once startup succeeded
pub struct StartupContext {
    pub config: ClientConfig,
    /// 保持日志写入线程存活，drop 时刷新缓冲
    _log_guard: WorkerGuard,
}

/// 加载配置并初始化日志
pub fn prepare_cli_startup(overrides: &ConfigOverrides) -> Result<StartupContext, CliError> {
    let config = ClientConfig::load(overrides)?;

    let log_guard = init_logging(&config.logging)
        .map_err(|e| CliError::ConfigError(format!("{:#}", e)))?;

    info!(
        "shorten {} using API at {}",
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );
    debug!(
        "redirect prefix {}, list failure policy {}",
        config.api.redirect_prefix, config.api.list_failure
    );

    Ok(StartupContext {
        config,
        _log_guard: log_guard,
    })
}
