//! C++ accessor generation for classgen.
//!
//! Turns a [`ClassDescriptor`](classgen_descriptor::ClassDescriptor) into a
//! declaration file (`<Class>.h`) and a definition file (`<Class>.cpp`)
//! holding a documented getter and setter per attribute.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented text building (CodeBuilder)
//! - [`ast`] - C++ fragments (Method, Param, DocBlock)
//! - [`files`] - The generated files (HeaderFile, SourceFile)

mod accessors;
mod generator;

pub mod ast;
pub mod builder;
pub mod files;

pub use accessors::Accessors;
pub use generator::{GenerateResult, Generator, PreviewFile};
