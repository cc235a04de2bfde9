//! 配置类型定义模块

use serde::{Deserialize, Serialize};

/// What `list()` does when the collection request fails.
///
/// `EmptyOnError` absorbs the failure and yields an empty listing, so a broken
/// list endpoint reads as "no URLs". `Propagate` returns the error like every
/// other operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ListFailurePolicy {
    #[default]
    #[serde(rename = "empty", alias = "empty_on_error")]
    EmptyOnError,
    #[serde(rename = "propagate")]
    Propagate,
}

impl std::fmt::Display for ListFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOnError => write!(f, "empty"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

impl std::str::FromStr for ListFailurePolicy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" | "empty_on_error" => Ok(Self::EmptyOnError),
            "propagate" => Ok(Self::Propagate),
            _ => Err(format!(
                "Invalid list failure policy: '{}'. Valid: empty, propagate",
                s
            )),
        }
    }
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
