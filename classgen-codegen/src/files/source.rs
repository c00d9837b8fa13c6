use classgen_core::GeneratedFile;
use classgen_descriptor::ClassDescriptor;

use crate::{Accessors, builder::CodeBuilder};

/// The `<Class>.cpp` definition file
pub struct SourceFile<'a> {
    class: &'a ClassDescriptor,
}

impl<'a> SourceFile<'a> {
    pub fn new(class: &'a ClassDescriptor) -> Self {
        Self { class }
    }
}

impl GeneratedFile for SourceFile<'_> {
    fn file_name(&self) -> String {
        self.class.source_file_name()
    }

    fn render(&self) -> String {
        let class = self.class.name.as_str();

        CodeBuilder::new()
            .line(&format!("#include \"./{}\"", self.class.header_file_name()))
            .each(&self.class.attributes, |b, attribute| {
                let acc = Accessors::new(attribute);
                let b = acc.setter().render_definition(class, b.blank());
                acc.getter().render_definition(class, b.blank())
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        let class = ClassDescriptor::new("Point");
        assert_eq!(SourceFile::new(&class).file_name(), "Point.cpp");
    }

    #[test]
    fn test_render_without_attributes() {
        let class = ClassDescriptor::new("Empty");
        assert_eq!(
            SourceFile::new(&class).render(),
            "#include \"./Empty.h\"\n"
        );
    }

    #[test]
    fn test_getter_returns_field_assigned_by_setter() {
        let class = ClassDescriptor::new("Point").attribute("int", "x");
        let source = SourceFile::new(&class).render();

        assert!(source.contains("void Point::setX(const int& x) {\n\tthis->x = x;\n}\n"));
        assert!(source.contains("int Point::getX() const {\n\treturn this->x;\n}\n"));
    }
}
