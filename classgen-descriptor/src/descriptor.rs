//! Parsed class description types.

use miette::SourceSpan;

/// A single `<type> <identifier>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Declared type, verbatim (may contain spaces, `*`, `&`, templates...)
    pub ty: String,
    /// Identifier, verbatim
    pub name: String,
    /// Byte offset of the source line
    offset: usize,
    /// Byte length of the source line
    len: usize,
}

impl Attribute {
    /// Create an attribute that does not come from a source line.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            offset: 0,
            len: 0,
        }
    }

    /// Parse one declaration line starting at byte `offset` of its source.
    ///
    /// Returns `None` for blank lines (only space characters). The line is
    /// split at its last space; a line without one yields an empty type.
    pub(crate) fn from_line(line: &str, offset: usize) -> Option<Self> {
        if line.chars().all(|c| c == ' ') {
            return None;
        }

        let (ty, name) = match line.rfind(' ') {
            Some(index) => (&line[..index], &line[index + 1..]),
            None => ("", line),
        };

        Some(Self {
            ty: ty.to_string(),
            name: name.to_string(),
            offset,
            len: line.len(),
        })
    }

    /// Span of the declaring line in the source text.
    pub fn span(&self) -> SourceSpan {
        (self.offset, self.len).into()
    }
}

/// A class name plus its attributes in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class name (first token of the description)
    pub name: String,
    /// Attributes in input order, duplicates included
    pub attributes: Vec<Attribute>,
}

impl ClassDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute (builder style).
    pub fn attribute(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(ty, name));
        self
    }

    /// File name of the generated declaration file.
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.name)
    }

    /// File name of the generated definition file.
    pub fn source_file_name(&self) -> String {
        format!("{}.cpp", self.name)
    }
}
