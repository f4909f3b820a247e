pub mod commands;
pub mod render;
pub mod repl;
pub mod setup;
pub mod task;
pub mod widgets;

pub use repl::run_repl_mode;
pub use setup::{setup_from_cli, AppConfig};
pub use task::run_prompt_mode;
