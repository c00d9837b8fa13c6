//! C++ member function builder.

use super::{DocBlock, Param};
use crate::builder::CodeBuilder;

/// Builder for a member function, rendered either as an in-class prototype
/// or as an out-of-class definition.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    doc: Option<DocBlock>,
    comment: Option<String>,
    params: Vec<Param>,
    return_type: String,
    is_const: bool,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            comment: None,
            params: Vec::new(),
            return_type: "void".to_string(),
            is_const: false,
            body: Vec::new(),
        }
    }

    /// Documentation block emitted above the prototype.
    pub fn doc(mut self, doc: DocBlock) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Line comment emitted above the definition.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    pub fn const_(mut self) -> Self {
        self.is_const = true;
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self, qualified_name: &str) -> String {
        let params = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");
        let qualifier = if self.is_const { " const" } else { "" };
        format!(
            "{} {}({}){}",
            self.return_type, qualified_name, params, qualifier
        )
    }

    /// Render the documented prototype, as declared inside the class body.
    pub fn render_prototype(&self, builder: CodeBuilder) -> CodeBuilder {
        let builder = match &self.doc {
            Some(doc) => doc.render(builder),
            None => builder,
        };
        builder.line(&format!("{};", self.signature(&self.name)))
    }

    /// Render the definition of this method as a member of `class`.
    pub fn render_definition(&self, class: &str, builder: CodeBuilder) -> CodeBuilder {
        let builder = match &self.comment {
            Some(comment) => builder.line(&format!("// {}", comment)),
            None => builder,
        };
        let header = format!("{} {{", self.signature(&format!("{}::{}", class, self.name)));
        builder.block_with_close(&header, "}", |b| {
            b.each(&self.body, |b, line| b.line(line))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParamStyle;

    fn area() -> Method {
        Method::new("getArea")
            .returns("double")
            .const_()
            .comment("getter to get area")
            .body_line("return this->area;")
    }

    #[test]
    fn test_prototype_without_doc() {
        let code = area().render_prototype(CodeBuilder::new()).build();
        assert_eq!(code, "double getArea() const;\n");
    }

    #[test]
    fn test_prototype_with_doc_and_param() {
        let code = Method::new("setArea")
            .doc(DocBlock::new().line("to set area"))
            .param(Param::new("area", "double", ParamStyle::ConstRef))
            .render_prototype(CodeBuilder::new().indent())
            .build();

        assert_eq!(
            code,
            "\t/**\n\t * to set area\n\t */\n\tvoid setArea(const double& area);\n"
        );
    }

    #[test]
    fn test_definition() {
        let code = area().render_definition("Shape", CodeBuilder::new()).build();
        assert_eq!(
            code,
            "// getter to get area\ndouble Shape::getArea() const {\n\treturn this->area;\n}\n"
        );
    }

    #[test]
    fn test_multiple_params() {
        let code = Method::new("move")
            .param(Param::new("dx", "int", ParamStyle::ByValue))
            .param(Param::new("dy", "int", ParamStyle::ByValue))
            .render_prototype(CodeBuilder::new())
            .build();
        assert_eq!(code, "void move(int dx, int dy);\n");
    }
}
