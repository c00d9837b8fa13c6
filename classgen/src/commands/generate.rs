use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::{BatchFile, Settings},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Default)]
pub struct GenerateCommand {
    /// Class description files (defaults to ./exampleInput)
    pub inputs: Vec<PathBuf>,

    /// Output directory (defaults to ./generated)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Batch file listing inputs and output (e.g. classgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let batch = self
            .config
            .as_deref()
            .map(|path| BatchFile::open(path).unwrap_or_exit());
        let settings = Settings::resolve(&self.inputs, self.output.as_deref(), batch);

        if self.dry_run {
            let report = ops::preview(&settings.inputs).unwrap_or_exit();
            report.render(&mut TerminalOutput::new());
            return Ok(());
        }

        let report = ops::generate_batch(&settings.inputs, &settings.output);
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
