use classgen_core::GeneratedFile;
use classgen_descriptor::ClassDescriptor;

use crate::{Accessors, builder::CodeBuilder};

/// The `<Class>.h` declaration file
pub struct HeaderFile<'a> {
    class: &'a ClassDescriptor,
}

impl<'a> HeaderFile<'a> {
    pub fn new(class: &'a ClassDescriptor) -> Self {
        Self { class }
    }
}

impl GeneratedFile for HeaderFile<'_> {
    fn file_name(&self) -> String {
        self.class.header_file_name()
    }

    fn render(&self) -> String {
        let accessors: Vec<Accessors> = self.class.attributes.iter().map(Accessors::new).collect();

        CodeBuilder::new()
            .line(&format!("class {} {{", self.class.name))
            .line("public:")
            .indent()
            .each(&accessors, |b, acc| {
                let b = acc.setter().render_prototype(b).blank();
                acc.getter().render_prototype(b).blank()
            })
            .dedent()
            .line("private:")
            .indent()
            .each(&accessors, |b, acc| b.line(&acc.field()))
            .dedent()
            .line("};")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let class = ClassDescriptor::new("Point");
        assert_eq!(HeaderFile::new(&class).file_name(), "Point.h");
    }

    #[test]
    fn test_render_without_attributes() {
        let class = ClassDescriptor::new("Empty");
        assert_eq!(
            HeaderFile::new(&class).render(),
            "class Empty {\npublic:\nprivate:\n};\n"
        );
    }

    #[test]
    fn test_fields_keep_input_order() {
        let class = ClassDescriptor::new("Order")
            .attribute("int", "b")
            .attribute("char*", "a")
            .attribute("int", "b");
        let header = HeaderFile::new(&class).render();

        let private = header.split("private:\n").nth(1).unwrap();
        assert_eq!(private, "\tint b;\n\tchar* a;\n\tint b;\n};\n");
    }
}
