//! Getter/setter pair derived from one attribute.

use classgen_core::{to_accessor_form, to_phrase_form};
use classgen_descriptor::Attribute;

use crate::ast::{DocBlock, Method, Param};

/// The accessor methods generated for a single attribute.
///
/// Method names use the accessor form of the identifier, documentation uses
/// the phrase form, and the field/parameter keep the raw identifier.
#[derive(Debug, Clone)]
pub struct Accessors<'a> {
    attribute: &'a Attribute,
    suffix: String,
    phrase: String,
}

impl<'a> Accessors<'a> {
    pub fn new(attribute: &'a Attribute) -> Self {
        Self {
            attribute,
            suffix: to_accessor_form(&attribute.name),
            phrase: to_phrase_form(&attribute.name),
        }
    }

    pub fn setter_name(&self) -> String {
        format!("set{}", self.suffix)
    }

    pub fn getter_name(&self) -> String {
        format!("get{}", self.suffix)
    }

    pub fn setter(&self) -> Method {
        let name = &self.attribute.name;
        Method::new(self.setter_name())
            .doc(
                DocBlock::new()
                    .line(format!("to set {}", self.phrase))
                    .blank()
                    .line(format!("@param {} the {} to set", name, self.phrase)),
            )
            .comment(format!("setter to set {}", self.phrase))
            .param(Param::for_type(name.as_str(), self.attribute.ty.as_str()))
            .body_line(format!("this->{} = {};", name, name))
    }

    pub fn getter(&self) -> Method {
        Method::new(self.getter_name())
            .doc(
                DocBlock::new()
                    .line(format!("to get {}", self.phrase))
                    .blank()
                    .line(format!("@returns the {} to get", self.phrase)),
            )
            .comment(format!("getter to get {}", self.phrase))
            .returns(self.attribute.ty.as_str())
            .const_()
            .body_line(format!("return this->{};", self.attribute.name))
    }

    /// Private field declaration, without trailing newline.
    pub fn field(&self) -> String {
        format!("{} {};", self.attribute.ty, self.attribute.name)
    }
}
