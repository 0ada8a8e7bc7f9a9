use crate::config::TomlConfig;
use crate::utils::error::{PostcodeError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "agency-postcodes")]
#[command(about = "Validate, format and sync agency postcode ranges")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Base URL of the agency postcode range resource")]
    pub endpoint_base: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long = "header", global = true, value_parser = parse_key_val, help = "Extra request header as KEY=VALUE")]
    pub headers: Vec<(String, String)>,

    #[arg(long, global = true, help = "Flat TOML file with translated messages")]
    pub messages: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Validate postcode text and print the stored form
    Parse {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Turn stored ranges back into editable text
    Format {
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Show the current postcode ranges of an agency
    Fetch { agency_id: String },
    /// Validate and save the postcode ranges of an agency
    Update {
        agency_id: String,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, help = "Send a single POST instead of DELETE followed by POST")]
        create: bool,
    },
}

fn parse_key_val(raw: &str) -> std::result::Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", raw))?;
    Ok((key.trim().to_string(), value.to_string()))
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => {
                let endpoint_base = validate_required_field("endpoint_base", &self.endpoint_base)?;
                TomlConfig::new(endpoint_base.clone())
            }
        };

        if let Some(endpoint_base) = &self.endpoint_base {
            config.api.endpoint_base = endpoint_base.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.api.timeout_seconds = Some(timeout);
        }
        for (name, value) in &self.headers {
            config.set_header(name.clone(), value.clone());
        }
        if let Some(messages) = &self.messages {
            config.set_messages_file(messages.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// 只用到翻譯的子命令不需要 API 設定
    pub fn resolve_offline(&self) -> Result<TomlConfig> {
        if self.config.is_none() && self.endpoint_base.is_none() {
            let mut config = TomlConfig::new("http://localhost");
            if let Some(messages) = &self.messages {
                config.set_messages_file(messages.clone());
            }
            return Ok(config);
        }
        self.resolve()
    }
}

/// 從檔案或 stdin 讀取全部內容
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(PostcodeError::IoError),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
