//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckEntry, CheckReport, CheckedClass};
pub use generate::{ClassSummary, GenerateReport, InputFailure, PreviewReport};
pub use output::{Report, TerminalOutput};
