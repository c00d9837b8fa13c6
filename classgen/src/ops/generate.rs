//! Generate operation - description to `.h`/`.cpp` pair.

use std::path::{Path, PathBuf};

use classgen_codegen::Generator;
use classgen_core::ensure_dir;
use classgen_descriptor::ClassFile;
use tracing::{debug, error, info};

use crate::reports::{ClassSummary, GenerateReport, InputFailure, PreviewReport};

/// Generate the files for a single description.
///
/// An unreadable input is returned as an error and nothing is written.
/// Unwritable output files are logged and listed in the summary.
pub fn generate_one(
    input: &Path,
    output_dir: &Path,
) -> classgen_descriptor::Result<ClassSummary> {
    let file = ClassFile::open(input)?;
    prepare_output_dir(output_dir);
    Ok(write_class(&file, output_dir))
}

/// Generate every description in order, stopping at the first one that
/// cannot be read. Later inputs are reported as skipped and never opened.
pub fn generate_batch(inputs: &[PathBuf], output_dir: &Path) -> GenerateReport {
    let mut report = GenerateReport::new(output_dir);

    for (index, input) in inputs.iter().enumerate() {
        match generate_one(input, output_dir) {
            Ok(summary) => report.classes.push(summary),
            Err(error) => {
                report.failure = Some(InputFailure {
                    input: input.clone(),
                    error,
                });
                report.skipped = inputs[index + 1..].to_vec();
                break;
            }
        }
    }

    info!(
        classes = report.classes.len(),
        skipped = report.skipped.len(),
        success = report.is_success(),
        "batch finished"
    );
    report
}

/// Render every description without writing, stopping at the first
/// unreadable input.
pub fn preview(inputs: &[PathBuf]) -> classgen_descriptor::Result<PreviewReport> {
    let mut files = Vec::new();
    for input in inputs {
        let file = ClassFile::open(input)?;
        files.extend(Generator::new(file.descriptor()).preview());
    }
    Ok(PreviewReport { files })
}

/// Create the output directory if needed; a no-op once it exists.
fn prepare_output_dir(output_dir: &Path) {
    // Failure surfaces again as one write error per file.
    if let Err(err) = ensure_dir(output_dir) {
        error!("{:#}", err);
    }
}

fn write_class(file: &ClassFile, output_dir: &Path) -> ClassSummary {
    let class = file.descriptor();
    debug!(input = %file.path().display(), class = %class.name, "generating");

    let result = Generator::new(class).generate(output_dir);

    ClassSummary {
        input: file.path().to_path_buf(),
        class_name: class.name.clone(),
        warnings: file.warnings(),
        written: result.written,
        failed: result.failed,
    }
}
