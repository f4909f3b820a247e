// Logging module - verbose HTTP dumps and credential redaction
pub mod request_logger;

// Re-export request logging functions
pub use request_logger::{
    log_request,
    log_response,
    format_request_dump,
    format_response_dump,
};

/// Number of leading key characters kept visible in logs
const VISIBLE_KEY_CHARS: usize = 6;

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Redact an API key for display: a short prefix followed by `***`.
///
/// Keys too short to leave anything hidden are masked completely.
pub fn redact_api_key(api_key: &str) -> String {
    let total = api_key.chars().count();
    if total == 0 {
        "<unset>".to_string()
    } else if total <= VISIBLE_KEY_CHARS * 2 {
        "***".to_string()
    } else {
        format!("{}***", api_key.chars().take(VISIBLE_KEY_CHARS).collect::<String>())
    }
}
