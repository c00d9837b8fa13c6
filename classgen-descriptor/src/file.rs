use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{ClassDescriptor, Error, Result, SourceContext, Warning, lint};

/// A class description file with both raw content and parsed descriptor.
pub struct ClassFile {
    path: PathBuf,
    content: String,
    descriptor: ClassDescriptor,
}

impl ClassFile {
    /// Open and parse a class description file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let descriptor = ClassDescriptor::parse(&content);
        debug!(
            path = %path.display(),
            class = %descriptor.name,
            attributes = descriptor.attributes.len(),
            "parsed class description"
        );

        Ok(Self {
            path,
            content,
            descriptor,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed descriptor.
    pub fn descriptor(&self) -> &ClassDescriptor {
        &self.descriptor
    }

    /// Run the description lints against this file.
    pub fn warnings(&self) -> Vec<Warning> {
        let ctx = SourceContext::new(self.content.as_str(), self.path.display().to_string());
        lint(&self.descriptor, &ctx)
    }
}
