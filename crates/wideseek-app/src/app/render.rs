use std::io::Write;

use colored::Colorize;

use wideseek_chat::{SessionConfig, SessionEvent, SessionObserver, SessionStore, TurnState};
use wideseek_models::{Message, ModelName, Role};

/// Shown while a completion request is outstanding
pub const THINKING_TEXT: &str = "Xiaomei is thinking...";

pub fn banner() -> String {
    format!(
        "{}\n{}",
        "🤖 WideSeek - chat with Xiaomei".bright_cyan().bold(),
        "Type a message to chat, /help for commands, 'exit' or 'quit' to leave.".bright_black()
    )
}

pub fn render_message(message: &Message) -> String {
    let speaker = match message.role() {
        Role::User => "You:".bright_green().bold(),
        Role::Assistant => "Xiaomei:".bright_cyan().bold(),
    };
    format!("{} {}", speaker, message.content())
}

pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_settings(config: &SessionConfig, api_base: &str) -> String {
    let system_prompt = match config.system_prompt() {
        Some(_) => "on",
        None => "off",
    };
    [
        format!("{}", "⚙️  Settings".bright_cyan().bold()),
        format!("  API key:       {}", config.api_key()),
        format!("  Endpoint:      {}", api_base),
        format!("  Model:         {}", config.model().display_name()),
        format!("  Temperature:   {:.1}", config.temperature()),
        format!("  Max tokens:    {}", config.max_tokens()),
        format!("  History turns: {}", config.history_turns()),
        format!("  System prompt: {}", system_prompt),
    ]
    .join("\n")
}

/// The model dropdown: numbered choices with the current one marked
pub fn render_model_choices(current: ModelName) -> String {
    let mut lines = vec![format!("{}", "Available models:".bright_cyan())];
    for (i, model) in ModelName::ALL.iter().enumerate() {
        let marker = if *model == current { "●" } else { " " };
        lines.push(format!("  {} {}. {} ({})", marker, i + 1, model.display_name(), model.as_str()));
    }
    lines.push(format!("{}", "Select with /model <name or number>".bright_black()));
    lines.join("\n")
}

pub fn help_text() -> String {
    [
        format!("{}", "Commands:".bright_cyan().bold()),
        "  /key [KEY]            - Set the API key (prompts with hidden input;".to_string(),
        "                          refused where the terminal cannot hide it)".to_string(),
        "  /model [NAME|NUMBER]  - List models or select one".to_string(),
        "  /temperature [0-2]    - Show or set temperature (step 0.1)".to_string(),
        "  /max-tokens [100-4000]- Show or set max tokens (step 100)".to_string(),
        "  /clear                - Clear the conversation".to_string(),
        "  /history              - Show the conversation so far".to_string(),
        "  /settings             - Show current settings".to_string(),
        "  /help                 - Show this help".to_string(),
        "  //text                - Send a message that starts with '/'".to_string(),
        "  exit | quit           - Leave".to_string(),
    ]
    .join("\n")
}

pub fn missing_key_notice() -> String {
    format!(
        "{} {}",
        "🔑".yellow(),
        "Please enter your API key with /key before chatting.".yellow()
    )
}

pub fn error_line(message: impl std::fmt::Display) -> String {
    format!("{} {}", "Error:".bright_red().bold(), message)
}

/// Busy indicator driven by session events
#[derive(Debug, Default)]
pub struct ThinkingIndicator {
    shown: bool,
}

impl SessionObserver for ThinkingIndicator {
    fn on_event(&mut self, event: &SessionEvent, _store: &SessionStore) {
        let mut stdout = std::io::stdout();
        match event {
            SessionEvent::TurnStateChanged(TurnState::AwaitingResponse) => {
                print!("{}", THINKING_TEXT.bright_black().italic());
                self.shown = true;
            }
            SessionEvent::TurnStateChanged(TurnState::Idle) if self.shown => {
                // Erase the indicator line
                print!("\r\x1b[2K");
                self.shown = false;
            }
            _ => return,
        }
        let _ = stdout.flush();
    }
}
