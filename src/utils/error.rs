use crate::domain::model::PostcodeIssue;
use thiserror::Error;

/// 郵遞區號範圍驗證失敗：一次收集所有問題。
///
/// `message` 是每個問題翻譯後以 `\n` 串接的結果（依發現順序），
/// `issues` 則保留結構化的錯誤記錄供呼叫端與測試使用。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RangeValidationError {
    issues: Vec<PostcodeIssue>,
    message: String,
}

impl RangeValidationError {
    pub fn new(issues: Vec<PostcodeIssue>, message: String) -> Self {
        Self { issues, message }
    }

    pub fn issues(&self) -> &[PostcodeIssue] {
        &self.issues
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 每個問題各自的訊息行
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.message.split('\n')
    }
}

#[derive(Error, Debug)]
pub enum PostcodeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {method} {url}")]
    HttpStatusError {
        method: String,
        url: String,
        status: u16,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (value: {value})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid argument '{field}': {reason} (value: {value:?})")]
    InvalidArgumentError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{0}")]
    ValidationError(#[from] RangeValidationError),
}

impl PostcodeError {
    pub fn is_validation(&self) -> bool {
        matches!(self, PostcodeError::ValidationError(_))
    }

    /// CLI 的結束代碼
    pub fn exit_code(&self) -> i32 {
        match self {
            PostcodeError::ValidationError(_) => 2,
            PostcodeError::ConfigError { .. }
            | PostcodeError::InvalidConfigValueError { .. }
            | PostcodeError::MissingConfigError { .. }
            | PostcodeError::UrlError(_) => 3,
            PostcodeError::InvalidArgumentError { .. } => 4,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PostcodeError>;
