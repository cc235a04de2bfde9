use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenerError {
    Transport(String),
    Http { status: u16, message: String },
    NotFound(String),
    Validation(String),
    Decode(String),
    Config(String),
    FileOperation(String),
}

impl ShortenerError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortenerError::Transport(_) => "E001",
            ShortenerError::Http { .. } => "E002",
            ShortenerError::NotFound(_) => "E003",
            ShortenerError::Validation(_) => "E004",
            ShortenerError::Decode(_) => "E005",
            ShortenerError::Config(_) => "E006",
            ShortenerError::FileOperation(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortenerError::Transport(_) => "Network Error",
            ShortenerError::Http { .. } => "Server Error",
            ShortenerError::NotFound(_) => "Resource Not Found",
            ShortenerError::Validation(_) => "Validation Error",
            ShortenerError::Decode(_) => "Unexpected Response",
            ShortenerError::Config(_) => "Configuration Error",
            ShortenerError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortenerError::Transport(msg) => msg,
            ShortenerError::Http { message, .. } => message,
            ShortenerError::NotFound(msg) => msg,
            ShortenerError::Validation(msg) => msg,
            ShortenerError::Decode(msg) => msg,
            ShortenerError::Config(msg) => msg,
            ShortenerError::FileOperation(msg) => msg,
        }
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ShortenerError::Http { status, .. } => Some(*status),
            ShortenerError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ShortenerError::NotFound(_))
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于通知）
    pub fn format_simple(&self) -> String {
        match self {
            ShortenerError::Http { status, message } => {
                format!("{} ({}): {}", self.error_type(), status, message)
            }
            _ => format!("{}: {}", self.error_type(), self.message()),
        }
    }
}

impl fmt::Display for ShortenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortenerError {}

// 便捷的构造函数
impl ShortenerError {
    pub fn transport<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Transport(msg.into())
    }

    pub fn http<T: Into<String>>(status: u16, msg: T) -> Self {
        ShortenerError::Http {
            status,
            message: msg.into(),
        }
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortenerError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Validation(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Decode(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShortenerError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortenerError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<ureq::Error> for ShortenerError {
    fn from(err: ureq::Error) -> Self {
        ShortenerError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ShortenerError {
    fn from(err: serde_json::Error) -> Self {
        ShortenerError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for ShortenerError {
    fn from(err: std::io::Error) -> Self {
        ShortenerError::FileOperation(err.to_string())
    }
}

impl From<url::ParseError> for ShortenerError {
    fn from(err: url::ParseError) -> Self {
        ShortenerError::Config(format!("invalid URL: {}", err))
    }
}

impl From<config::ConfigError> for ShortenerError {
    fn from(err: config::ConfigError) -> Self {
        ShortenerError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortenerError {
    fn from(err: toml::ser::Error) -> Self {
        ShortenerError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortenerError>;
