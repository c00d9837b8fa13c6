//! Core utilities and types for the classgen accessor generator.
//!
//! This crate provides the file writing primitives and identifier
//! transforms shared by the reader, the code generator and the CLI.

mod file;
mod naming;

// File operations
pub use file::{GeneratedFile, ensure_dir};
// Identifier transforms
pub use naming::{to_accessor_form, to_phrase_form};
