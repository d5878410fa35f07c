use anyhow::Result;

use gdt_updater::cli::Command;
use gdt_updater::{handle_completions, handle_generate, handle_teams, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Generate {
            opponent,
            file,
            output,
            team,
        } => handle_generate(opponent, file, output.as_deref(), team),
        Command::Teams { team } => handle_teams(team),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
