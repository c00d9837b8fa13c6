mod header;
mod source;

pub use header::HeaderFile;
pub use source::SourceFile;
