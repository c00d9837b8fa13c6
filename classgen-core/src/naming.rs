//! Identifier transforms used to name accessors and document them.

/// Convert an identifier to the suffix used after `get`/`set`
/// (e.g., "first name" -> "FirstName", "x" -> "X").
///
/// The first character and every character that follows a space are
/// uppercased; spaces are dropped.
pub fn to_accessor_form(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize = true;
    for c in s.chars() {
        if c == ' ' {
            capitalize = true;
            continue;
        }
        if capitalize {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        capitalize = false;
    }
    result
}

/// Convert an identifier to a lowercase phrase for documentation
/// (e.g., "firstName" -> "first name").
///
/// Lossy for multi-word identifiers: `to_phrase_form(to_accessor_form(s))`
/// only gives back `s` for single lowercase words.
pub fn to_phrase_form(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut chars = s.chars();
    if let Some(first) = chars.next() {
        result.extend(first.to_lowercase());
    }
    for c in chars {
        if c.is_uppercase() {
            result.push(' ');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
