use clap::Parser;
use clap_complete::Shell;

use wideseek_llm_api::{DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS};

use crate::config::{ENV_API_BASE, ENV_API_KEY, ENV_MODEL};

/// CLI arguments for wideseek
#[derive(Parser, Debug)]
#[command(name = "wideseek")]
#[command(about = "WideSeek - chat with Xiaomei, your AI assistant")]
#[command(version)]
pub struct Cli {
    /// API key for the completion endpoint (can also be entered with /key)
    #[arg(long, value_name = "KEY", env = ENV_API_KEY, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible endpoint
    #[arg(long, value_name = "URL", env = ENV_API_BASE, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Model to chat with (gpt-4o-mini, gpt-3.5-turbo, gpt-4)
    #[arg(long, value_name = "MODEL", env = ENV_MODEL)]
    pub model: Option<String>,

    /// Sampling temperature, 0.0 to 2.0 in steps of 0.1
    #[arg(long, value_name = "T")]
    pub temperature: Option<f32>,

    /// Maximum reply length in tokens, 100 to 4000 in steps of 100
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Completed exchanges replayed with every request
    #[arg(long, value_name = "N")]
    pub history_turns: Option<usize>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Replace the conversation preamble sent as the system message
    #[arg(long, value_name = "TEXT", conflicts_with = "no_system_prompt")]
    pub system_prompt: Option<String>,

    /// Send no system message at all
    #[arg(long)]
    pub no_system_prompt: bool,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Send a single message, print the reply, and exit
    #[arg(long, value_name = "TEXT")]
    pub prompt: Option<String>,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
