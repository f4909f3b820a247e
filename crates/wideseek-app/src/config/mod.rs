pub mod helpers;

pub use helpers::{init_logging, log_filter, parse_model, resolve_system_prompt};

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "WIDESEEK_API_KEY";

/// Environment variable overriding the endpoint base URL
pub const ENV_API_BASE: &str = "WIDESEEK_API_BASE";

/// Environment variable selecting the start-up model
pub const ENV_MODEL: &str = "WIDESEEK_MODEL";
