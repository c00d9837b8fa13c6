//! Parameter passing for generated setters.

/// How a setter receives its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamStyle {
    /// `T name`
    ByValue,
    /// `const T& name`
    ConstRef,
}

impl ParamStyle {
    /// Pick the passing style from the declared type text.
    ///
    /// Pointers are passed by value, everything else by constant reference.
    /// Purely textual: any `*` in the type counts as a pointer.
    pub fn for_type(ty: &str) -> Self {
        if ty.contains('*') {
            Self::ByValue
        } else {
            Self::ConstRef
        }
    }
}

/// A parameter in a C++ function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub style: ParamStyle,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, style: ParamStyle) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            style,
        }
    }

    /// Parameter whose passing style follows its type text.
    pub fn for_type(name: impl Into<String>, ty: impl Into<String>) -> Self {
        let ty = ty.into();
        let style = ParamStyle::for_type(&ty);
        Self::new(name, ty, style)
    }

    /// Render as it appears in a parameter list.
    pub fn render(&self) -> String {
        match self.style {
            ParamStyle::ByValue => format!("{} {}", self.ty, self.name),
            ParamStyle::ConstRef => format!("const {}& {}", self.ty, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_for_type() {
        assert_eq!(ParamStyle::for_type("int"), ParamStyle::ConstRef);
        assert_eq!(ParamStyle::for_type("std::string"), ParamStyle::ConstRef);
        assert_eq!(ParamStyle::for_type("char*"), ParamStyle::ByValue);
        assert_eq!(ParamStyle::for_type("const Node *"), ParamStyle::ByValue);
        assert_eq!(ParamStyle::for_type(""), ParamStyle::ConstRef);
    }

    #[test]
    fn test_render_const_ref() {
        assert_eq!(Param::for_type("x", "int").render(), "const int& x");
        assert_eq!(
            Param::for_type("items", "std::vector<int>").render(),
            "const std::vector<int>& items"
        );
    }

    #[test]
    fn test_render_by_value_keeps_type_text() {
        assert_eq!(Param::for_type("name", "char*").render(), "char* name");
        assert_eq!(Param::for_type("next", "Node *").render(), "Node * next");
    }
}
