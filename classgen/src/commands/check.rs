use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::{BatchFile, Settings},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Class description files (defaults to ./exampleInput)
    pub inputs: Vec<PathBuf>,

    /// Batch file listing inputs (e.g. classgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let batch = self
            .config
            .as_deref()
            .map(|path| BatchFile::open(path).unwrap_or_exit());
        let settings = Settings::resolve(&self.inputs, None, batch);

        let report = ops::check(&settings.inputs);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
