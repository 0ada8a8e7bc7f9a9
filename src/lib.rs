pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpPostcodeRangeApi;
pub use adapters::translation::{KeyTranslator, MessageCatalog};
pub use config::{ConfigProvider, TomlConfig};
pub use crate::core::{
    formatter::format_ranges, parser::RangeParser, service::PostcodeRangeService,
};
pub use domain::model::{PostcodeIssue, UpdateMethod};
pub use domain::ports::{PostcodeRangeApi, Translator};
pub use utils::error::{PostcodeError, RangeValidationError, Result};
