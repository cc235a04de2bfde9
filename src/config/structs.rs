use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use super::types::{ListFailurePolicy, LogFormat};
use crate::errors::{Result, ShortenerError};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
/// 环境变量前缀，例如 `SHORTEN__API__BASE_URL`
pub const ENV_PREFIX: &str = "SHORTEN";

/// Values given on the command line; they win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub base_url: Option<String>,
    pub redirect_prefix: Option<String>,
}

/// Client configuration, built once at startup and passed down explicitly.
///
/// Sources, highest priority first: CLI flags, environment
/// (`SHORTEN__SECTION__KEY`), `config.toml`, defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shortener API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_redirect_prefix")]
    pub redirect_prefix: String,
    #[serde(default)]
    pub list_failure: ListFailurePolicy,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Empty or unset: log to stderr
    #[serde(default)]
    pub file: Option<String>,
}

impl ClientConfig {
    /// 从 TOML 文件、环境变量和命令行参数加载配置
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        use config::{Config, Environment, File, FileFormat};

        let path = overrides
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let settings = Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", overrides.base_url.clone())?
            .set_override_option("api.redirect_prefix", overrides.redirect_prefix.clone())?
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ShortenerError::config(format!(
                "api.base_url must use http or https, got '{}'",
                base.scheme()
            )));
        }
        if !base.has_host() {
            return Err(ShortenerError::config("api.base_url has no host"));
        }
        if self.api.redirect_prefix.trim_matches('/').is_empty() {
            return Err(ShortenerError::config(
                "api.redirect_prefix must name a path segment, e.g. /r/",
            ));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            redirect_prefix: default_redirect_prefix(),
            list_failure: ListFailurePolicy::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_redirect_prefix() -> String {
    "/r/".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}
