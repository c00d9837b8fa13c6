//! Class description parsing for classgen.
//!
//! A class description is a plain-text file holding a class name followed by
//! one `<type> <identifier>` attribute per line:
//!
//! ```text
//! Point
//! int x
//! int y
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod descriptor;
mod error;
mod file;
mod lint;
mod parse;

pub use descriptor::{Attribute, ClassDescriptor};
pub use error::{Error, Result, SourceContext, Warning};
pub use file::ClassFile;
pub use lint::lint;
