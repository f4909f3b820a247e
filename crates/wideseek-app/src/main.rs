use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use wideseek::{init_logging, run_prompt_mode, run_repl_mode, setup_from_cli, Cli};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(shell) = cli.generate {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(cli.verbose);

    let app_config = setup_from_cli(&cli)?;

    if let Some(prompt) = cli.prompt.as_deref() {
        return run_prompt_mode(app_config, prompt).await;
    }

    run_repl_mode(app_config).await?;
    Ok(ExitCode::SUCCESS)
}
