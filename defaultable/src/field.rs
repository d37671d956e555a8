//! Field metadata for default application
//!
//! This metadata is derived from struct field declarations, not duplicated.

/// The semantic kind of a field - determines how annotation text is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `String` - annotation text is used verbatim
    String,
    /// `i8` through `i64` and `isize` - base-10
    Integer,
    /// `f32` or `f64` - decimal
    Float,
    /// `bool` - boolean literal
    Boolean,
    /// `Vec<String>` - comma-separated, appended verbatim
    StringList,
    /// `Vec<i*>` - comma-separated, unparsable tokens dropped
    IntegerList,
    /// Any other declared type - defaults are never applied
    Unsupported,
}

/// Metadata about one struct field - derived from the field declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Declaration-order position within the struct
    pub index: usize,
    /// Field name
    pub name: &'static str,
    /// Semantic kind
    pub kind: FieldKind,
    /// Default annotation text, if the field carries one
    pub default: Option<&'static str>,
}

impl FieldMeta {
    pub const fn new(index: usize, name: &'static str, kind: FieldKind) -> Self {
        Self {
            index,
            name,
            kind,
            default: None,
        }
    }

    pub const fn with_default(mut self, text: &'static str) -> Self {
        self.default = Some(text);
        self
    }
}
