use crate::config::{ConfigProvider, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{PostcodeError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub translations: Option<TranslationConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint_base: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// 扁平 TOML 翻譯檔
    pub file: Option<String>,
    pub messages: Option<HashMap<String, String>>,
}

impl TomlConfig {
    pub fn new(endpoint_base: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                endpoint_base: endpoint_base.into(),
                timeout_seconds: None,
                headers: None,
            },
            translations: None,
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PostcodeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PostcodeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AGENCY_API_TOKEN})，找不到的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.api
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
    }

    pub fn set_messages_file(&mut self, path: impl Into<String>) {
        self.translations
            .get_or_insert_with(TranslationConfig::default)
            .file = Some(path.into());
    }
}

impl ConfigProvider for TomlConfig {
    fn endpoint_base(&self) -> &str {
        &self.api.endpoint_base
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        self.api
            .headers
            .iter()
            .flatten()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }

    fn messages_file(&self) -> Option<&str> {
        self.translations.as_ref().and_then(|t| t.file.as_deref())
    }

    fn message_overrides(&self) -> Vec<(&str, &str)> {
        self.translations
            .iter()
            .filter_map(|t| t.messages.as_ref())
            .flatten()
            .map(|(key, template)| (key.as_str(), template.as_str()))
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint_base", &self.api.endpoint_base)?;
        validate_range("api.timeout_seconds", self.timeout_seconds(), 1, 600)?;

        for (name, _) in self.headers() {
            validate_non_empty_string("api.headers", name)?;
        }

        if let Some(path) = self.messages_file() {
            validate_non_empty_string("translations.file", path)?;
        }

        Ok(())
    }
}
