use anyhow::Result;
use std::process::ExitCode;

use wideseek_chat::{ChatSession, TurnError, TurnOutcome};

use crate::app::render::{error_line, missing_key_notice};
use crate::app::setup::AppConfig;

/// Run a single turn, print the reply, and exit.
///
/// The reply goes to stdout on its own so the mode composes with pipes;
/// failures go to stderr and yield a non-zero exit code.
pub async fn run_prompt_mode(app_config: AppConfig, prompt: &str) -> Result<ExitCode> {
    let mut session = app_config.build_session()?;
    if run_single_turn(&mut session, prompt).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// `true` when the provider replied
pub(crate) async fn run_single_turn(session: &mut ChatSession, prompt: &str) -> bool {
    match session.submit(prompt).await {
        Ok(TurnOutcome::Replied(reply)) => {
            println!("{}", reply);
            true
        }
        Ok(TurnOutcome::Failed(error)) => {
            eprintln!("{}", error_line(error));
            false
        }
        Err(TurnError::MissingApiKey) => {
            eprintln!("{}", missing_key_notice());
            eprintln!("Pass --api-key or set WIDESEEK_API_KEY.");
            false
        }
        Err(e @ TurnError::EmptyInput) => {
            eprintln!("{}", error_line(e));
            false
        }
    }
}
