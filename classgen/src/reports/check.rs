//! Check command report data structures.

use std::path::PathBuf;

use classgen_descriptor::Warning;

use super::output::{Output, Report};

/// Report data from checking class descriptions.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// One entry per input, in input order.
    pub entries: Vec<CheckEntry>,
}

/// Check outcome for one input.
#[derive(Debug)]
pub struct CheckEntry {
    pub input: PathBuf,
    pub outcome: classgen_descriptor::Result<CheckedClass>,
}

/// A description that was read successfully.
#[derive(Debug)]
pub struct CheckedClass {
    pub name: String,
    pub attributes: usize,
    pub warnings: Vec<Warning>,
}

impl CheckReport {
    /// Whether every input could be read.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|entry| entry.outcome.is_ok())
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            match &entry.outcome {
                Ok(class) => {
                    for warning in &class.warnings {
                        out.diagnostic(warning);
                    }
                    let summary = format!(
                        "{}: class {} ({} attributes)",
                        entry.input.display(),
                        class.name,
                        class.attributes
                    );
                    if class.warnings.is_empty() {
                        out.success_item(&summary);
                    } else {
                        out.success_item(&format!(
                            "{}, {} warning(s)",
                            summary,
                            class.warnings.len()
                        ));
                    }
                }
                Err(error) => {
                    out.diagnostic(error.as_ref());
                    out.failure_item(&format!("{}: unreadable", entry.input.display()));
                }
            }
        }
    }
}
