//! Non-fatal checks over a parsed description.

use tracing::debug;

use crate::{ClassDescriptor, SourceContext, Warning};

/// Collect warnings for `class`, parsed from the text held by `ctx`.
pub fn lint(class: &ClassDescriptor, ctx: &SourceContext) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if class.name.is_empty() {
        warnings.push(ctx.missing_class_name());
    }

    for attribute in &class.attributes {
        if attribute.ty.trim().is_empty() {
            warnings.push(ctx.missing_type(&attribute.name, attribute.span()));
        } else if attribute.name.is_empty() {
            warnings.push(ctx.empty_identifier(&attribute.ty, attribute.span()));
        }
    }

    debug!(
        file = ctx.filename(),
        count = warnings.len(),
        "linted class description"
    );
    warnings
}
