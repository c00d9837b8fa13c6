//! Class description parsing from files and strings.

use std::{convert::Infallible, str::FromStr};

use crate::{Attribute, ClassDescriptor};

impl FromStr for ClassDescriptor {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl ClassDescriptor {
    /// Parse a class description.
    ///
    /// The first whitespace-delimited token is the class name and the rest of
    /// its line is ignored. Every following non-blank line is an attribute.
    /// Parsing never fails; degenerate input yields degenerate descriptors.
    /// CRLF line endings are normalised: a trailing `\r` is not part of the
    /// attribute line.
    pub fn parse(src: &str) -> Self {
        let start = src.len() - src.trim_start().len();
        let token_len = src[start..]
            .find(char::is_whitespace)
            .unwrap_or(src.len() - start);
        let name = &src[start..start + token_len];

        let after_name = start + token_len;
        let body_start = match src[after_name..].find('\n') {
            Some(index) => after_name + index + 1,
            None => src.len(),
        };

        let mut attributes = Vec::new();
        let mut offset = body_start;
        for raw in src[body_start..].split_inclusive('\n') {
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            let line = line.strip_suffix('\r').unwrap_or(line);
            if let Some(attribute) = Attribute::from_line(line, offset) {
                attributes.push(attribute);
            }
            offset += raw.len();
        }

        Self {
            name: name.to_string(),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(class: &ClassDescriptor) -> Vec<(&str, &str)> {
        class
            .attributes
            .iter()
            .map(|a| (a.ty.as_str(), a.name.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_point() {
        let class = ClassDescriptor::parse("Point\nint x\nint y\n");
        assert_eq!(class.name, "Point");
        assert_eq!(fields(&class), vec![("int", "x"), ("int", "y")]);
    }

    #[test]
    fn test_parse_ignores_rest_of_first_line() {
        let class = ClassDescriptor::parse("Point extra words\nint x");
        assert_eq!(class.name, "Point");
        assert_eq!(fields(&class), vec![("int", "x")]);
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let class = ClassDescriptor::parse("\n\n   Point\nint x\n");
        assert_eq!(class.name, "Point");
        assert_eq!(fields(&class), vec![("int", "x")]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let class = ClassDescriptor::parse("Point\n\nint x\n   \n\nint y\n");
        assert_eq!(fields(&class), vec![("int", "x"), ("int", "y")]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let class = ClassDescriptor::parse("Dup\nint a\nfloat a\nint a");
        assert_eq!(
            fields(&class),
            vec![("int", "a"), ("float", "a"), ("int", "a")]
        );
    }

    #[test]
    fn test_parse_multi_word_types() {
        let class = ClassDescriptor::parse("Person\nstd::string first name\nconst char* nick\n");
        assert_eq!(
            fields(&class),
            vec![("std::string first", "name"), ("const char*", "nick")]
        );
    }

    #[test]
    fn test_parse_crlf() {
        let class = ClassDescriptor::parse("Point\r\nint x\r\nint y\r\n");
        assert_eq!(class.name, "Point");
        assert_eq!(fields(&class), vec![("int", "x"), ("int", "y")]);

        let src = "Point\r\nint x\r\nint y\r\n";
        let span = ClassDescriptor::parse(src).attributes[1].span();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "int y");
    }

    #[test]
    fn test_parse_empty() {
        let class = ClassDescriptor::parse("");
        assert_eq!(class.name, "");
        assert!(class.attributes.is_empty());
    }

    #[test]
    fn test_parse_name_only() {
        let class = ClassDescriptor::parse("Empty");
        assert_eq!(class.name, "Empty");
        assert!(class.attributes.is_empty());
    }

    #[test]
    fn test_parse_attribute_spans() {
        let src = "Point\nint x\n\nint y\n";
        let class = ClassDescriptor::parse(src);
        let second = &class.attributes[1];
        let span = second.span();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "int y");
    }

    #[test]
    fn test_from_str() {
        let class: ClassDescriptor = "Point\nint x".parse().unwrap();
        assert_eq!(class.name, "Point");
    }
}
