mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use miette::Diagnostic;

/// Extension trait for exiting on input errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "classgen")]
#[command(version)]
#[command(about = "Generate C++ getters and setters from class descriptions")]
pub(crate) struct Cli {
    /// Show debug logs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => GenerateCommand::default().run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate .h/.cpp files (the default when no command is given)
    Generate(GenerateCommand),

    /// Read class descriptions and report problems without generating
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
