use anyhow::{anyhow, Result};

use wideseek_models::{ModelName, DEFAULT_SYSTEM_PROMPT};

use crate::cli::Cli;

/// Default `env_logger` filter; `RUST_LOG` wins when set
pub fn log_filter(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}

pub fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}

/// Model from the command line or environment; unknown names are an error
pub fn parse_model(name: Option<&str>) -> Result<ModelName> {
    match name {
        None => Ok(ModelName::default()),
        Some(name) => name
            .parse::<ModelName>()
            .map_err(|e| anyhow!("invalid model setting: {}", e)),
    }
}

/// The system message to send, if any
pub fn resolve_system_prompt(cli: &Cli) -> Option<String> {
    if cli.no_system_prompt {
        None
    } else {
        Some(
            cli.system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        )
    }
}
