/// Every slash command the REPL understands, in help order
pub const COMMAND_NAMES: [&str; 8] = [
    "/help",
    "/key",
    "/model",
    "/max-tokens",
    "/temperature",
    "/clear",
    "/history",
    "/settings",
];

/// One line of REPL input, classified
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Empty,
    Exit,
    Command(Command),
    Message(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    /// Set the API key; `None` prompts for it with masked echo
    Key(Option<String>),
    /// Select a model; `None` lists the choices
    Model(Option<String>),
    /// Raw slider value, clamped and snapped before it is applied
    Temperature(Option<f64>),
    MaxTokens(Option<f64>),
    Clear,
    History,
    Settings,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type /help for a list)")]
    Unknown(String),
    #[error("{command} expects a number, got '{value}'")]
    NotANumber { command: &'static str, value: String },
}

/// Classify one line of input.
///
/// Commands and `exit`/`quit` are recognised after trimming; a chat message
/// is kept exactly as typed. A leading `//` sends a message that starts with
/// a literal `/` (only the first slash is dropped).
pub fn parse_input(line: &str) -> Result<Input, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Input::Empty);
    }
    if trimmed == "exit" || trimmed == "quit" {
        return Ok(Input::Exit);
    }
    if trimmed.starts_with("//") {
        let escaped = line.trim_start();
        return Ok(Input::Message(escaped[1..].to_string()));
    }
    if !trimmed.starts_with('/') {
        return Ok(Input::Message(line.to_string()));
    }
    let (name, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (trimmed, None),
    };

    let command = match name {
        "/help" => Command::Help,
        "/key" => Command::Key(arg.map(str::to_string)),
        "/model" => Command::Model(arg.map(str::to_string)),
        "/temperature" | "/temp" => Command::Temperature(parse_number("/temperature", arg)?),
        "/max-tokens" | "/max_tokens" => Command::MaxTokens(parse_number("/max-tokens", arg)?),
        "/clear" => Command::Clear,
        "/history" => Command::History,
        "/settings" => Command::Settings,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Input::Command(command))
}

fn parse_number(command: &'static str, arg: Option<&str>) -> Result<Option<f64>, CommandError> {
    arg.map(|value| {
        value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CommandError::NotANumber {
                command,
                value: value.to_string(),
            })
    })
    .transpose()
}
