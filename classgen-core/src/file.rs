use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file name relative to the output directory
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Get the file path inside the output directory
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    /// Write the file to disk, always overwriting, and return the written path.
    ///
    /// The output directory must already exist (see [`ensure_dir`]).
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create directory '{}'", dir.display()))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))
}
