use crate::domain::ports::Translator;
use crate::utils::error::{PostcodeError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// 直接回傳翻譯鍵，適合測試或尚未載入翻譯時使用
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str, _params: &[(&str, &str)]) -> String {
        key.to_string()
    }
}

const ENGLISH_MESSAGES: &[(&str, &str)] = &[
    (
        "message.error.postcode.inputMustBeString",
        "Postal code input must be text.",
    ),
    (
        "message.error.postcode.inputMustContainPostalCode",
        "Please enter at least one postal code.",
    ),
    (
        "message.error.postcode.emptyLine",
        "Line {{lineNumber}} is empty.",
    ),
    (
        "message.error.postcode.emptyEntry",
        "Line {{lineNumber}}, entry {{entryNumber}} is empty.",
    ),
    (
        "message.error.postcode.invalidCodeCount",
        "Line {{lineNumber}}, entry {{entryNumber}}: expected one or two postal codes, found {{count}}.",
    ),
    (
        "message.error.postcode.invalidPostalCode",
        "Line {{lineNumber}}, entry {{entryNumber}}, code {{partIndex}}: \"{{code}}\" is not a 5-digit postal code.",
    ),
    (
        "message.error.postcode.invalidRange",
        "Line {{lineNumber}}, entry {{entryNumber}}: {{secondCode}} must be greater than {{firstCode}}.",
    ),
];

/// 鍵值翻譯表，模板使用 `{{name}}` 佔位符。
///
/// 找不到的鍵回傳鍵本身；找不到的參數保留原佔位符。
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// 內建英文訊息
    pub fn english() -> Self {
        Self::new(
            ENGLISH_MESSAGES
                .iter()
                .map(|(key, template)| (key.to_string(), template.to_string()))
                .collect(),
        )
    }

    /// 從扁平 TOML 檔載入（`"message.error.postcode.emptyLine" = "..."`）
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PostcodeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let messages: HashMap<String, String> =
            toml::from_str(content).map_err(|e| PostcodeError::ConfigError {
                message: format!("Message catalog parsing error: {}", e),
            })?;
        Ok(Self::new(messages))
    }

    /// 以 `overrides` 覆蓋同名鍵
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, template) in overrides {
            self.messages.insert(key.into(), template.into());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> HashMap<String, String> {
        self.messages
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        match self.get(key) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("valid placeholder pattern"))
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &regex::Captures| {
            let name = &caps[1];
            params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_english_catalog_has_every_postcode_key() {
        let catalog = MessageCatalog::english();
        assert_eq!(catalog.len(), 7);
        for (key, _) in ENGLISH_MESSAGES {
            assert!(catalog.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_interpolation() {
        let catalog = MessageCatalog::english();
        let message = catalog.translate(
            "message.error.postcode.invalidRange",
            &[
                ("lineNumber", "2"),
                ("entryNumber", "3"),
                ("firstCode", "67890"),
                ("secondCode", "12345"),
            ],
        );
        assert_eq!(message, "Line 2, entry 3: 12345 must be greater than 67890.");
    }

    #[test]
    fn test_unknown_key_and_missing_param() {
        let catalog = MessageCatalog::english();
        assert_eq!(catalog.translate("no.such.key", &[]), "no.such.key");
        assert_eq!(
            catalog.translate("message.error.postcode.emptyLine", &[]),
            "Line {{lineNumber}} is empty."
        );
    }

    #[test]
    fn test_placeholder_whitespace_is_allowed() {
        let mut messages = HashMap::new();
        messages.insert("greeting".to_string(), "Hi {{ name }}!".to_string());
        let catalog = MessageCatalog::new(messages);
        assert_eq!(catalog.translate("greeting", &[("name", "Ada")]), "Hi Ada!");
    }

    #[test]
    fn test_overrides_and_file_loading() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                "\"message.error.postcode.emptyLine\" = \"第 {{lineNumber}} 行是空的\"\n".as_bytes(),
            )
            .unwrap();

        let loaded = MessageCatalog::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), 1);

        let merged = MessageCatalog::english().with_overrides(&loaded.messages);
        assert_eq!(merged.len(), 7);
        assert_eq!(
            merged.translate("message.error.postcode.emptyLine", &[("lineNumber", "4")]),
            "第 4 行是空的"
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = MessageCatalog::from_toml_str("not = [valid");
        assert!(matches!(result, Err(PostcodeError::ConfigError { .. })));
    }
}
