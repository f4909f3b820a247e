//! WideSeek application library
//!
//! Command-line parsing, start-up configuration, and the terminal front-end
//! for chatting with Xiaomei.

pub use wideseek_chat as chat;
pub use wideseek_llm_api as llm_api;
pub use wideseek_models as models;

pub mod app;
pub mod cli;
pub mod config;

pub use app::{run_prompt_mode, run_repl_mode, setup_from_cli, AppConfig};
pub use cli::Cli;
pub use config::init_logging;
