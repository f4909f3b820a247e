use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use wideseek_chat::{ChatSession, ConfigUpdate, SessionConfig, SessionStore, DEFAULT_HISTORY_TURNS};
use wideseek_llm_api::{normalize_api_base, ClientSettings, OpenAiCompatClient};

use crate::app::widgets::{max_tokens_slider, temperature_slider};
use crate::cli::Cli;
use crate::config::{parse_model, resolve_system_prompt};

/// Application configuration derived from CLI arguments and environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub session_config: SessionConfig,
    pub client_settings: ClientSettings,
}

/// Set up application configuration from CLI arguments.
///
/// Precedence is CLI flag, then `WIDESEEK_*` environment, then defaults.
/// Temperature and max tokens pass through the same sliders as REPL edits.
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let mut update = ConfigUpdate::default().model(parse_model(cli.model.as_deref())?);
    if let Some(key) = &cli.api_key {
        update = update.api_key(key.as_str());
    }
    if let Some(t) = cli.temperature {
        update = update.temperature(temperature_slider(t as f64));
    }
    if let Some(n) = cli.max_tokens {
        update = update.max_tokens(max_tokens_slider(n as f64));
    }

    let mut session_config = SessionConfig::default()
        .with_system_prompt(resolve_system_prompt(cli))
        .with_history_turns(cli.history_turns.unwrap_or(DEFAULT_HISTORY_TURNS));
    session_config
        .apply(update)
        .context("Invalid start-up settings")?;

    let client_settings = ClientSettings {
        api_base: normalize_api_base(&cli.api_base),
        timeout: Duration::from_secs(cli.timeout_secs),
        verbose: cli.verbose,
    };

    Ok(AppConfig {
        session_config,
        client_settings,
    })
}

impl AppConfig {
    /// Fresh session talking to the configured endpoint
    pub fn build_session(&self) -> Result<ChatSession> {
        let client = OpenAiCompatClient::new(&self.client_settings)
            .context("Failed to build HTTP client")?;
        log::info!("completion endpoint: {}", client.url());
        Ok(ChatSession::new(
            SessionStore::with_config(self.session_config.clone()),
            Arc::new(client),
        ))
    }
}
