use colored::Colorize;

use wideseek_models::ChatRequest;
use crate::{redact_api_key, safe_truncate};

/// Bodies longer than this are truncated in console dumps
const MAX_DUMP_CHARS: usize = 5000;

fn describe_url(url: &str, out: &mut String) {
    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        out.push_str(&format!("{}: {}\n", "URL".bright_yellow(), url));
        out.push_str(&format!("{}: {}\n", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown")));
        out.push_str(&format!("{}: {}\n", "Port".bright_yellow(), parsed_url.port().map(|p| p.to_string()).unwrap_or_else(||
            if parsed_url.scheme() == "https" { "443 (default)".to_string() } else { "80 (default)".to_string() }
        )));
        out.push_str(&format!("{}: {}\n", "Scheme".bright_yellow(), parsed_url.scheme()));
    } else {
        out.push_str(&format!("{}: {}\n", "URL".bright_yellow(), url));
    }
}

fn push_body(body: &str, out: &mut String) {
    if body.chars().count() > MAX_DUMP_CHARS {
        out.push_str(&safe_truncate(body, MAX_DUMP_CHARS));
        out.push('\n');
        out.push_str(&format!("{}\n", format!("... (truncated, total {} bytes)", body.len()).bright_black()));
    } else {
        out.push_str(body);
        out.push('\n');
    }
}

/// Render the request dump; the bearer credential is always redacted.
pub fn format_request_dump(url: &str, request: &ChatRequest, api_key: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "═".repeat(80).bright_cyan()));
    out.push_str(&format!("{}\n", "HTTP REQUEST DEBUG".bright_cyan().bold()));
    out.push_str(&format!("{}\n", "═".repeat(80).bright_cyan()));

    describe_url(url, &mut out);

    out.push_str(&format!("\n{}\n", "Headers:".bright_yellow()));
    out.push_str("  Content-Type: application/json\n");
    out.push_str(&format!("  Authorization: Bearer {}\n", redact_api_key(api_key)));

    out.push_str(&format!("\n{}\n", "Request Body:".bright_yellow()));
    match serde_json::to_string_pretty(request) {
        Ok(json) => push_body(&json, &mut out),
        Err(e) => out.push_str(&format!("{}\n", format!("Error serializing request: {}", e).red())),
    }

    out.push_str(&format!("{}\n", "═".repeat(80).bright_cyan()));
    out
}

/// Render the response dump, pretty-printing JSON bodies when possible.
pub fn format_response_dump(
    status: &reqwest::StatusCode,
    headers: &reqwest::header::HeaderMap,
    body: &str,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "═".repeat(80).bright_green()));
    out.push_str(&format!("{}\n", "HTTP RESPONSE DEBUG".bright_green().bold()));
    out.push_str(&format!("{}\n", "═".repeat(80).bright_green()));

    out.push_str(&format!("{}: {} {}\n",
        "Status".bright_yellow(),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    ));

    out.push_str(&format!("\n{}\n", "Headers:".bright_yellow()));
    for (name, value) in headers.iter() {
        if let Ok(val_str) = value.to_str() {
            out.push_str(&format!("  {}: {}\n", name.as_str().bright_white(), val_str));
        }
    }

    out.push_str(&format!("\n{}\n", "Response Body:".bright_yellow()));
    // Try to pretty-print JSON, fall back to raw text
    let pretty = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok());
    push_body(pretty.as_deref().unwrap_or(body), &mut out);

    out.push_str(&format!("{}\n", "═".repeat(80).bright_green()));
    out
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, request: &ChatRequest, api_key: &str, verbose: bool) {
    log::debug!(
        "POST {} model={} messages={} key={}",
        url,
        request.model,
        request.messages.len(),
        redact_api_key(api_key)
    );
    if verbose {
        println!("{}", format_request_dump(url, request, api_key));
    }
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: &reqwest::StatusCode, headers: &reqwest::header::HeaderMap, body: &str, verbose: bool) {
    log::debug!("response status={} bytes={}", status.as_u16(), body.len());
    if verbose {
        println!("{}", format_response_dump(status, headers, body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wideseek_models::{ModelName, WireMessage};

    fn sample_request() -> ChatRequest {
        ChatRequest {
            model: ModelName::Gpt4,
            messages: vec![WireMessage::system("hello there")],
            temperature: 1.0,
            max_tokens: 200,
        }
    }

    #[test]
    fn test_request_dump_redacts_key() {
        colored::control::set_override(false);
        let key = "sk-live-0123456789abcdef";
        let dump = format_request_dump("https://example.com/v1/chat/completions", &sample_request(), key);

        assert!(!dump.contains(key));
        assert!(dump.contains("Authorization: Bearer sk-liv***"));
        assert!(dump.contains("Host: example.com"));
        assert!(dump.contains("443 (default)"));
        assert!(dump.contains("\"model\": \"gpt-4\""));
    }

    #[test]
    fn test_response_dump_pretty_prints_json() {
        colored::control::set_override(false);
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let dump = format_response_dump(&reqwest::StatusCode::TOO_MANY_REQUESTS, &headers, r#"{"error":{"message":"slow down"}}"#);

        assert!(dump.contains("Status: 429 Too Many Requests"));
        assert!(dump.contains("content-type: application/json"));
        assert!(dump.contains("\"message\": \"slow down\""));
    }

    #[test]
    fn test_response_dump_truncates_long_bodies() {
        colored::control::set_override(false);
        let body = "x".repeat(MAX_DUMP_CHARS + 100);
        let dump = format_response_dump(&reqwest::StatusCode::OK, &reqwest::header::HeaderMap::new(), &body);

        assert!(dump.contains(&format!("(truncated, total {} bytes)", body.len())));
    }
}
