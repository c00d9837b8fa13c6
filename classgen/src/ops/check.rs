//! Check operation - read and lint descriptions without generating.

use std::path::PathBuf;

use classgen_descriptor::ClassFile;

use crate::reports::{CheckEntry, CheckReport, CheckedClass};

/// Check every description. Unlike generation, an unreadable input does not
/// stop the remaining checks.
pub fn check(inputs: &[PathBuf]) -> CheckReport {
    let entries = inputs
        .iter()
        .map(|input| CheckEntry {
            input: input.clone(),
            outcome: ClassFile::open(input).map(|file| CheckedClass {
                name: file.descriptor().name.clone(),
                attributes: file.descriptor().attributes.len(),
                warnings: file.warnings(),
            }),
        })
        .collect();

    CheckReport { entries }
}
