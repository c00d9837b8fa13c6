use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for description reading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for diagnostic reporting.
///
/// Encapsulates the description text and its filename so warnings can point
/// at the offending line.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub(crate) fn missing_class_name(&self) -> Warning {
        Warning::MissingClassName {
            src: self.named_source(),
        }
    }

    pub(crate) fn missing_type(&self, name: impl Into<String>, span: SourceSpan) -> Warning {
        Warning::MissingType {
            src: self.named_source(),
            span,
            name: name.into(),
        }
    }

    pub(crate) fn empty_identifier(&self, ty: impl Into<String>, span: SourceSpan) -> Warning {
        Warning::EmptyIdentifier {
            src: self.named_source(),
            span,
            ty: ty.into(),
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(classgen::input_not_found),
        help("check that the class description exists and is readable")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Non-fatal findings about a parsed description.
///
/// Generation still runs on the literal parse; these only flag input that
/// is unlikely to produce compilable output.
#[derive(Debug, Error, Diagnostic)]
pub enum Warning {
    #[error("missing class name")]
    #[diagnostic(
        code(classgen::missing_class_name),
        severity(Warning),
        help("the first word of the description names the class")
    )]
    MissingClassName {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("attribute '{name}' has no type")]
    #[diagnostic(
        code(classgen::missing_type),
        severity(Warning),
        help("declare attributes as '<type> <name>'")
    )]
    MissingType {
        #[source_code]
        src: NamedSource<String>,
        #[label("no type before the name")]
        span: SourceSpan,
        name: String,
    },

    #[error("attribute of type '{ty}' has no name")]
    #[diagnostic(
        code(classgen::empty_identifier),
        severity(Warning),
        help("remove the trailing space or add a name")
    )]
    EmptyIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("line ends with a space")]
        span: SourceSpan,
        ty: String,
    },
}
