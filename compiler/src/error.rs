use thiserror::Error;

#[derive(Debug, Error)]
pub enum NestGenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The field {name} is defined twice (lines {first_line} and {second_line})")]
    DuplicateField {
        name:        String,
        first_line:  usize,
        second_line: usize,
    },

    #[error("Output {file_name} is already claimed by struct {claimed_by}")]
    OutputConflict {
        file_name:  String,
        claimed_by: String,
    },
}

/// A field line that does not follow the `Type `json:"..." bson:"..."`` shape.
/// These never fail an input; they are reported next to the parsed fields.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TagError {
    #[error("Syntax error at line {line}, column {column}: unexpected {text}")]
    UnexpectedCharacter {
        text:   String,
        line:   usize,
        column: usize,
    },

    #[error("Line {line} has no struct tag")]
    MissingTag { line: usize },

    #[error("Line {line} has no type before the struct tag")]
    MissingType { line: usize },

    #[error("Malformed tag entry at line {line}, column {column}: {text}")]
    MalformedEntry {
        text:   String,
        line:   usize,
        column: usize,
    },

    #[error("Line {line}: expected {key} entry but found {found}")]
    MissingEntry {
        key:   &'static str,
        found: String,
        line:  usize,
    },

    #[error("Line {line}: invalid {key} name {text}")]
    InvalidName {
        key:  &'static str,
        text: String,
        line: usize,
    },

    #[error("Line {line}: unsupported {key} option {text}")]
    UnsupportedOption {
        key:  &'static str,
        text: String,
        line: usize,
    },
}

impl TagError {
    pub fn line(&self) -> usize {
        match self {
            TagError::UnexpectedCharacter { line, .. }
            | TagError::MissingTag { line }
            | TagError::MissingType { line }
            | TagError::MalformedEntry { line, .. }
            | TagError::MissingEntry { line, .. }
            | TagError::InvalidName { line, .. }
            | TagError::UnsupportedOption { line, .. } => *line,
        }
    }

    /// Column for the variants that point inside the line.
    pub fn column(&self) -> Option<usize> {
        match self {
            TagError::UnexpectedCharacter { column, .. }
            | TagError::MalformedEntry { column, .. } => Some(*column),
            _ => None,
        }
    }
}
