//! Per-kind parse-and-assign rules for default annotations.
//!
//! These functions are called from `#[derive(Defaultable)]` generated code,
//! one per [`FieldKind`](crate::FieldKind). None of them can fail: annotation
//! text that does not parse leaves the field unchanged, logged at trace level
//! and otherwise silent. Scalar fields are only written while still at their
//! zero value; list fields always append.

use std::str::FromStr;

use tracing::trace;

/// Assign `text` verbatim if the field is still empty.
pub fn set_string(field: &mut String, _name: &str, text: &str) {
    if field.is_empty() {
        *field = text.to_owned();
    }
}

/// Parse `text` as a base-10 integer and assign it if the field is still zero.
pub fn set_integer<T>(field: &mut T, name: &str, text: &str)
where
    T: FromStr + Default + PartialEq,
{
    if *field != T::default() {
        return;
    }
    match text.parse::<T>() {
        Ok(value) => *field = value,
        Err(_) => trace!(field = name, value = text, "integer default did not parse"),
    }
}

/// Parse `text` as a decimal float and assign it if the field is still zero.
pub fn set_float<T>(field: &mut T, name: &str, text: &str)
where
    T: FromStr + Default + PartialEq,
{
    if *field != T::default() {
        return;
    }
    match text.parse::<T>() {
        Ok(value) => *field = value,
        Err(_) => trace!(field = name, value = text, "float default did not parse"),
    }
}

/// Parse `text` as a boolean literal and assign it if the field is still false.
pub fn set_bool(field: &mut bool, name: &str, text: &str) {
    if *field {
        return;
    }
    match parse_bool(text) {
        Some(value) => *field = value,
        None => trace!(field = name, value = text, "boolean default did not parse"),
    }
}

/// Append each comma-separated token verbatim. There is no escaping mechanism
/// for embedded commas, and an empty annotation appends one empty string.
pub fn append_strings(field: &mut Vec<String>, _name: &str, text: &str) {
    for token in text.split(',') {
        field.push(token.to_owned());
    }
}

/// Append each comma-separated token that parses as a base-10 integer,
/// dropping the tokens that do not. Partial results are possible.
pub fn append_integers<T>(field: &mut Vec<T>, name: &str, text: &str)
where
    T: FromStr,
{
    for token in text.split(',') {
        match token.parse::<T>() {
            Ok(value) => field.push(value),
            Err(_) => trace!(field = name, token, "list element did not parse, dropped"),
        }
    }
}

/// Boolean literals and their common variants.
fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
