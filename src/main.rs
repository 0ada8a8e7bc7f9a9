use agency_postcodes::config::cli::{read_input, Command};
use agency_postcodes::utils::logger;
use agency_postcodes::{
    format_ranges, CliConfig, ConfigProvider, PostcodeError, PostcodeRangeService, RangeParser,
    UpdateMethod,
};
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            let exit_code = e
                .downcast_ref::<PostcodeError>()
                .map(PostcodeError::exit_code)
                .unwrap_or(1);

            tracing::debug!("Command failed with exit code {}: {:?}", exit_code, e);
            eprintln!("❌ {:#}", e);
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: &CliConfig) -> anyhow::Result<String> {
    match &cli.command {
        Command::Parse { input } => {
            let config = cli.resolve_offline()?;
            let parser = RangeParser::new(config.message_catalog()?);
            let text = read_input(input.as_deref()).context("failed to read postcode input")?;
            Ok(parser.parse(&text).map_err(PostcodeError::from)?)
        }
        Command::Format { input } => {
            let text = read_input(input.as_deref()).context("failed to read stored ranges")?;
            Ok(format_ranges(text.trim_end()))
        }
        Command::Fetch { agency_id } => {
            let config = cli.resolve()?;
            let service = PostcodeRangeService::from_config(&config)?;
            let display = service.load_form_value(agency_id).await?;
            Ok(display.unwrap_or_default())
        }
        Command::Update {
            agency_id,
            input,
            create,
        } => {
            let config = cli.resolve()?;
            let service = PostcodeRangeService::from_config(&config)?;
            let text = read_input(input.as_deref()).context("failed to read postcode input")?;
            let method = if *create {
                UpdateMethod::Create
            } else {
                UpdateMethod::Replace
            };

            let id = service.update(agency_id, &text, method).await?;
            Ok(format!("✅ Postcode ranges saved for agency {}", id))
        }
    }
}
