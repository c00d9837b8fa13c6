use std::path::{Path, PathBuf};

use classgen_core::GeneratedFile;
use classgen_descriptor::ClassDescriptor;
use tracing::{error, info};

use crate::files::{HeaderFile, SourceFile};

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<PathBuf>,
    /// Files that could not be written (already reported on the error channel)
    pub failed: Vec<PathBuf>,
}

impl GenerateResult {
    /// Whether every file was written.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// C++ generator producing the declaration and definition files of a class
pub struct Generator<'a> {
    class: &'a ClassDescriptor,
}

impl<'a> Generator<'a> {
    pub fn new(class: &'a ClassDescriptor) -> Self {
        Self { class }
    }

    fn files(&self) -> [Box<dyn GeneratedFile + 'a>; 2] {
        [
            Box::new(HeaderFile::new(self.class)),
            Box::new(SourceFile::new(self.class)),
        ]
    }

    /// Preview generated files without writing to disk
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.file_name(),
                content: file.render(),
            })
            .collect()
    }

    /// Write both files into `output_dir`.
    ///
    /// A file that cannot be written is logged and skipped; the other file
    /// is still attempted. The directory itself is not created here.
    pub fn generate(&self, output_dir: &Path) -> GenerateResult {
        let mut result = GenerateResult::default();

        for file in self.files() {
            match file.write(output_dir) {
                Ok(path) => {
                    info!(class = %self.class.name, path = %path.display(), "wrote file");
                    result.written.push(path);
                }
                Err(err) => {
                    error!(class = %self.class.name, "{:#}", err);
                    result.failed.push(file.path(output_dir));
                }
            }
        }

        result
    }
}
