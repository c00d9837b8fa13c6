//! C++ fragments used by the generated files.

mod doc;
mod method;
mod param;

pub use doc::DocBlock;
pub use method::Method;
pub use param::{Param, ParamStyle};
