//! Generate command report data structures.

use std::path::{Path, PathBuf};

use classgen_codegen::PreviewFile;
use classgen_descriptor::Warning;

use super::output::{Output, Report};

/// Report data from a generation batch.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Classes processed, in input order.
    pub classes: Vec<ClassSummary>,
    /// The input that stopped the batch, if any.
    pub failure: Option<InputFailure>,
    /// Inputs never attempted because of `failure`.
    pub skipped: Vec<PathBuf>,
}

/// Outcome for one successfully read description.
#[derive(Debug)]
pub struct ClassSummary {
    /// Description file.
    pub input: PathBuf,
    /// Class name read from it.
    pub class_name: String,
    /// Lint warnings for the description.
    pub warnings: Vec<Warning>,
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Files that could not be written.
    pub failed: Vec<PathBuf>,
}

/// A description that could not be read.
#[derive(Debug)]
pub struct InputFailure {
    pub input: PathBuf,
    pub error: Box<classgen_descriptor::Error>,
}

impl GenerateReport {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            classes: Vec::new(),
            failure: None,
            skipped: Vec::new(),
        }
    }

    /// Whether every input was read. Unwritable output files do not fail the batch.
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for class in &self.classes {
            for warning in &class.warnings {
                out.diagnostic(warning);
            }

            let written: Vec<String> = class
                .written
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            if written.is_empty() {
                out.failure_item(&format!(
                    "{} ({}): nothing written",
                    class.class_name,
                    class.input.display()
                ));
            } else {
                out.success_item(&format!(
                    "{} ({}) -> {}",
                    class.class_name,
                    class.input.display(),
                    written.join(", ")
                ));
            }

            for failed in &class.failed {
                out.warning(&format!("could not write {}", failed.display()));
            }
        }

        match &self.failure {
            None => {
                out.newline();
                out.preformatted(&format!(
                    "Generated {} class(es) into {}",
                    self.classes.len(),
                    self.output_dir.display()
                ));
            }
            Some(failure) => {
                out.diagnostic(failure.error.as_ref());
                out.failure_item(&format!("failed to read {}", failure.input.display()));
                if !self.skipped.is_empty() {
                    out.newline();
                    out.preformatted(&format!("Skipped ({}):", self.skipped.len()));
                    for skipped in &self.skipped {
                        out.list_item(&skipped.display().to_string());
                    }
                }
            }
        }
    }
}

/// Report data from a dry run.
#[derive(Debug)]
pub struct PreviewReport {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        for file in &self.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", self.files.len()));
    }
}
