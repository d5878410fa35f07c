use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Game day thread updater")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fill a game day thread template for the next game against an opponent
    Generate {
        /// Opponent name, nickname or code (e.g. "sabres", "BUF")
        opponent: String,
        /// Template file to read
        #[arg(short, long)]
        file: PathBuf,
        /// Where to write the result (defaults to the template file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Team whose thread this is
        #[arg(short, long, default_value = "NYR")]
        team: String,
    },
    /// List possible opponents
    Teams {
        /// Team to leave out of the list
        #[arg(short, long, default_value = "NYR")]
        team: String,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
