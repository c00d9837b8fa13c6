//! Documentation comment blocks.

use crate::builder::CodeBuilder;

/// A `/** ... */` documentation block. Empty lines render as a bare ` *`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    lines: Vec<String>,
}

impl DocBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder
            .line("/**")
            .each(&self.lines, |b, line| {
                if line.is_empty() {
                    b.line(" *")
                } else {
                    b.line(&format!(" * {}", line))
                }
            })
            .line(" */")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_doc_block() {
        let doc = DocBlock::new().line("to get x").blank().line("@returns the x");
        let code = doc.render(CodeBuilder::new().indent()).build();

        assert_eq!(
            code,
            "\t/**\n\t * to get x\n\t *\n\t * @returns the x\n\t */\n"
        );
    }

    #[test]
    fn test_render_empty_doc_block() {
        let code = DocBlock::new().render(CodeBuilder::new()).build();
        assert_eq!(code, "/**\n */\n");
    }
}
