pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod patch;
pub mod schedule;
pub mod services;
pub mod stats;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use std::path::Path;

use cli::Cli;

use crate::cli::Command;
use crate::config::{AppConfig, TeamDirectory};
use crate::errors::GenerateError;
use crate::http::FetchClient;
use crate::services::{Generated, GenerationRequest, GenerationService};

const BYTE_ORDER_MARK: char = '\u{feff}';

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_generate(opponent: &str, file: &Path, output: Option<&Path>, team: &str) -> Result<()> {
    let config = AppConfig::new();
    let teams = TeamDirectory::standard();

    let primary = resolve_team(&teams, team)?;
    let opponent = resolve_team(&teams, opponent)?;
    if primary == opponent {
        return Err(GenerateError::SameTeam(primary).into());
    }

    let template = read_template(file)?;
    let request = GenerationRequest {
        primary,
        opponent,
        template,
        today: chrono::Local::now().date_naive(),
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let generated = runtime.block_on(async {
        let fetcher = FetchClient::from_settings(&config.fetch)?;
        let service = GenerationService::new(&fetcher, &config, &teams)?;
        service.generate(&request).await
    })?;

    let target = output.unwrap_or(file);
    std::fs::write(target, &generated.html)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    print_summary(&request, &generated, target);
    Ok(())
}

pub fn handle_teams(team: &str) -> Result<()> {
    let teams = TeamDirectory::standard();
    let excluded = resolve_team(&teams, team)?;

    for identity in teams.opponents_of(&excluded) {
        println!("{}  {}", identity.code.bold(), identity.name);
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

// --- Helper Functions ---

fn resolve_team(teams: &TeamDirectory, text: &str) -> Result<String, GenerateError> {
    teams
        .resolve(text)
        .map(str::to_string)
        .ok_or_else(|| GenerateError::UnknownTeam(text.trim().to_string()))
}

fn read_template(file: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read template {}", file.display()))?;
    Ok(raw.strip_prefix(BYTE_ORDER_MARK).map(str::to_string).unwrap_or(raw))
}

fn print_summary(request: &GenerationRequest, generated: &Generated, target: &Path) {
    println!();
    match &generated.game {
        Some(game) => println!(
            "{} {} @ {} on {} at {}",
            "Game:".bold(),
            game.away,
            game.home,
            game.date_label,
            game.time_label
        ),
        None => println!("{} no upcoming {} vs {} game found", "Game:".bold(), request.primary, request.opponent),
    }

    if generated.warnings.is_empty() {
        println!("{}", "No warnings".green());
    } else {
        println!("{}", format!("{} warnings:", generated.warnings.len()).yellow());
        for warning in &generated.warnings {
            println!("  {} {}", "!".yellow(), warning);
        }
    }

    println!("{} {}", "Wrote".green().bold(), target.display());
}
