use serde::Serialize;
use crate::error::TagError;

/// One field recovered from a tagged struct line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    pub name:        String,
    pub source_type: String,
    pub required:    bool,
    pub line:        usize,
    pub column:      usize,
}

/// A non-blank line that did not yield a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub line:   usize,
    pub column: usize,
    pub text:   String,
    pub error:  TagError,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub fields:   Vec<FieldDescriptor>,
    pub rejected: Vec<Rejection>,
}

/// The `type Name struct { ... }` block found in a source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructBlock<'a> {
    pub name: &'a str,
    pub body: &'a str,
    /// Line on which `body` starts.
    pub line: usize,
}
