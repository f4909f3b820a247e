use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use wideseek_chat::{ChatSession, ConfigUpdate, TurnError, TurnOutcome};

use crate::app::commands::{parse_input, Command, Input};
use crate::app::render::{
    banner, error_line, help_text, missing_key_notice, render_message, render_model_choices,
    render_settings, render_transcript, ThinkingIndicator,
};
use crate::app::setup::AppConfig;
use crate::app::widgets::{
    max_tokens_slider, pick_model, temperature_slider, terminal_can_mask, ReplHelper,
};

type LineEditor = Editor<ReplHelper, DefaultHistory>;

/// What the loop should do once a command has been applied
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Print(String),
    PromptForKey,
}

/// Run interactive REPL mode
pub async fn run_repl_mode(app_config: AppConfig) -> Result<()> {
    let mut session = app_config.build_session()?;
    session.add_observer(Box::new(ThinkingIndicator::default()));
    let api_base = app_config.client_settings.api_base.clone();

    println!("{}", banner());
    println!(
        "{}\n",
        format!(
            "Model: {} • Endpoint: {}",
            session.store().config().model().display_name(),
            api_base
        )
        .bright_black()
    );
    println!("{}\n", render_transcript(session.store().transcript()));
    if session.store().config().api_key().is_empty() {
        println!("{}\n", missing_key_notice());
    }

    let mut rl: LineEditor = Editor::new().context("Failed to initialise line editor")?;
    rl.set_helper(Some(ReplHelper::default()));

    loop {
        let model_indicator = format!("[{}]", session.store().config().model()).bright_magenta();
        let readline = rl.readline(&format!("{} {} ", model_indicator, "You:".bright_green().bold()));

        match readline {
            Ok(line) => match parse_input(&line) {
                Ok(Input::Empty) => continue,
                Ok(Input::Exit) => {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }
                Ok(Input::Command(command)) => {
                    // Keys typed inline stay out of the history
                    if !matches!(command, Command::Key(_)) {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    let output = match handle_command(&mut session, command, &api_base) {
                        CommandOutput::PromptForKey if !terminal_can_mask() => error_line(
                            "this terminal cannot hide input; pass --api-key or set WIDESEEK_API_KEY instead",
                        ),
                        CommandOutput::PromptForKey => match prompt_for_key(&mut rl)? {
                            Some(key) => set_api_key(&mut session, key),
                            None => "API key unchanged".bright_black().to_string(),
                        },
                        CommandOutput::Print(text) => text,
                    };
                    println!("{}\n", output);
                }
                Ok(Input::Message(text)) => {
                    let _ = rl.add_history_entry(line.as_str());
                    run_turn(&mut session, &text).await;
                }
                Err(e) => eprintln!("{}\n", error_line(e)),
            },
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".bright_black());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => return Err(err).context("Failed to read input"),
        }
    }

    Ok(())
}

/// Submit one message and print whatever the turn appended
async fn run_turn(session: &mut ChatSession, text: &str) {
    match session.submit(text).await {
        Ok(outcome) => {
            if let TurnOutcome::Failed(error) = &outcome {
                eprintln!("{}", error_line(error));
            }
            if let Some(reply) = session.store().transcript().last() {
                println!("{}\n", render_message(reply));
            }
        }
        Err(TurnError::MissingApiKey) => println!("{}\n", missing_key_notice()),
        Err(TurnError::EmptyInput) => {}
    }
}

/// Read a key with masked echo; `None` when the user backs out
fn prompt_for_key(rl: &mut LineEditor) -> Result<Option<String>> {
    if let Some(helper) = rl.helper_mut() {
        helper.masking = true;
    }
    let result = rl.readline(&format!("{} ", "API key:".yellow().bold()));
    if let Some(helper) = rl.helper_mut() {
        helper.masking = false;
    }

    match result {
        Ok(key) if key.trim().is_empty() => Ok(None),
        Ok(key) => Ok(Some(key)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err).context("Failed to read API key"),
    }
}

fn set_api_key(session: &mut ChatSession, key: String) -> String {
    match session.update_config(ConfigUpdate::default().api_key(key)) {
        Ok(()) => format!(
            "{} API key set ({})",
            "✓".green(),
            session.store().config().api_key()
        ),
        Err(e) => error_line(e),
    }
}

/// Apply a command to the session. Everything except key entry is handled
/// here without touching the terminal.
pub fn handle_command(session: &mut ChatSession, command: Command, api_base: &str) -> CommandOutput {
    let text = match command {
        Command::Help => help_text(),
        Command::Key(None) => return CommandOutput::PromptForKey,
        Command::Key(Some(key)) => set_api_key(session, key),
        Command::Model(None) => render_model_choices(session.store().config().model()),
        Command::Model(Some(choice)) => match pick_model(&choice) {
            Some(model) => match session.update_config(ConfigUpdate::default().model(model)) {
                Ok(()) => format!("{} Model set to {}", "✓".green(), model.display_name()),
                Err(e) => error_line(e),
            },
            None => format!(
                "{}\n{}",
                error_line(format!("unknown model '{}'", choice)),
                render_model_choices(session.store().config().model())
            ),
        },
        Command::Temperature(None) => {
            format!("Temperature: {:.1}", session.store().config().temperature())
        }
        Command::Temperature(Some(raw)) => {
            let value = temperature_slider(raw);
            match session.update_config(ConfigUpdate::default().temperature(value)) {
                Ok(()) => format!("{} Temperature set to {:.1}", "✓".green(), value),
                Err(e) => error_line(e),
            }
        }
        Command::MaxTokens(None) => format!("Max tokens: {}", session.store().config().max_tokens()),
        Command::MaxTokens(Some(raw)) => {
            let value = max_tokens_slider(raw);
            match session.update_config(ConfigUpdate::default().max_tokens(value)) {
                Ok(()) => format!("{} Max tokens set to {}", "✓".green(), value),
                Err(e) => error_line(e),
            }
        }
        Command::Clear => {
            session.clear();
            format!(
                "{} Conversation cleared\n\n{}",
                "✓".green(),
                render_transcript(session.store().transcript())
            )
        }
        Command::History => render_transcript(session.store().transcript()),
        Command::Settings => render_settings(session.store().config(), api_base),
    };
    CommandOutput::Print(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use wideseek_chat::SessionStore;
    use wideseek_llm_api::{CompletionClient, CompletionError, CompletionRequest};
    use wideseek_models::{Message, ModelName};

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, CompletionError> {
            Ok(format!("echo: {}", request.user_text))
        }
    }

    fn session() -> ChatSession {
        colored::control::set_override(false);
        ChatSession::new(SessionStore::initialize(), Arc::new(EchoClient))
    }

    fn printed(output: CommandOutput) -> String {
        match output {
            CommandOutput::Print(text) => text,
            CommandOutput::PromptForKey => panic!("unexpected key prompt"),
        }
    }

    #[test]
    fn test_bare_key_command_prompts() {
        let mut session = session();
        assert_eq!(handle_command(&mut session, Command::Key(None), ""), CommandOutput::PromptForKey);
    }

    #[test]
    fn test_inline_key_is_stored_and_redacted() {
        let mut session = session();
        let text = printed(handle_command(
            &mut session,
            Command::Key(Some("sk-0123456789abcdefghij".to_string())),
            "",
        ));
        assert!(text.contains("sk-012***"));
        assert!(!text.contains("abcdefghij"));
        assert_eq!(session.store().config().api_key().expose(), "sk-0123456789abcdefghij");
    }

    #[test]
    fn test_model_selection() {
        let mut session = session();
        let text = printed(handle_command(&mut session, Command::Model(Some("3".to_string())), ""));
        assert!(text.contains("Model set to GPT-4"));
        assert_eq!(session.store().config().model(), ModelName::Gpt4);

        let text = printed(handle_command(&mut session, Command::Model(Some("claude".to_string())), ""));
        assert!(text.contains("unknown model 'claude'"));
        assert_eq!(session.store().config().model(), ModelName::Gpt4);
    }

    #[test]
    fn test_sliders_clamp_before_reaching_the_store() {
        let mut session = session();
        let text = printed(handle_command(&mut session, Command::Temperature(Some(2.7)), ""));
        assert!(text.contains("Temperature set to 2.0"));
        assert_eq!(session.store().config().temperature(), 2.0);

        handle_command(&mut session, Command::Temperature(Some(0.74)), "");
        assert_eq!(session.store().config().temperature(), 0.7);

        handle_command(&mut session, Command::MaxTokens(Some(4321.0)), "");
        assert_eq!(session.store().config().max_tokens(), 4000);

        handle_command(&mut session, Command::MaxTokens(Some(150.0)), "");
        assert_eq!(session.store().config().max_tokens(), 200);
    }

    #[test]
    fn test_show_current_values() {
        let mut session = session();
        assert_eq!(printed(handle_command(&mut session, Command::Temperature(None), "")), "Temperature: 0.7");
        assert_eq!(printed(handle_command(&mut session, Command::MaxTokens(None), "")), "Max tokens: 1000");
    }

    #[tokio::test]
    async fn test_clear_keeps_settings() {
        let mut session = session();
        handle_command(&mut session, Command::Key(Some("sk-0123456789abcdefghij".to_string())), "");
        handle_command(&mut session, Command::MaxTokens(Some(2000.0)), "");
        session.submit("Hi").await.unwrap();
        assert_eq!(session.store().transcript().len(), 3);

        handle_command(&mut session, Command::Clear, "");

        assert_eq!(session.store().transcript(), &[Message::greeting()]);
        assert_eq!(session.store().config().max_tokens(), 2000);
        assert!(!session.store().config().api_key().is_empty());
    }

    #[tokio::test]
    async fn test_history_shows_transcript() {
        let mut session = session();
        handle_command(&mut session, Command::Key(Some("sk-0123456789abcdefghij".to_string())), "");
        session.submit("Hi").await.unwrap();

        let text = printed(handle_command(&mut session, Command::History, ""));
        assert!(text.ends_with("You: Hi\n\nXiaomei: echo: Hi"));
    }

    #[test]
    fn test_settings_use_endpoint() {
        let mut session = session();
        let text = printed(handle_command(&mut session, Command::Settings, "https://gateway.example/v1"));
        assert!(text.contains("https://gateway.example/v1"));
        assert!(text.contains("<unset>"));
    }
}
