#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::adapters::translation::MessageCatalog;
use crate::utils::error::Result;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub trait ConfigProvider: Send + Sync {
    fn endpoint_base(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> Vec<(&str, &str)>;
    fn messages_file(&self) -> Option<&str>;
    fn message_overrides(&self) -> Vec<(&str, &str)>;

    /// 內建英文 → 翻譯檔 → 設定檔內嵌訊息，後者覆蓋前者
    fn message_catalog(&self) -> Result<MessageCatalog> {
        let mut catalog = MessageCatalog::english();
        if let Some(path) = self.messages_file() {
            let file_catalog = MessageCatalog::from_file(path)?;
            tracing::debug!("Loaded {} message(s) from {}", file_catalog.len(), path);
            catalog = catalog.with_overrides(file_catalog.into_messages());
        }
        Ok(catalog.with_overrides(self.message_overrides()))
    }
}
