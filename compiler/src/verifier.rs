use std::collections::HashMap;
use crate::{
    types::FieldDescriptor,
    utils::quote,
    error::NestGenError,
};

/// Returns `Err(NestGenError::DuplicateField)` when two fields share a name.
pub fn verify_fields(fields: &[FieldDescriptor]) -> Result<(), NestGenError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for field in fields {
        if let Some(&first_line) = seen.get(field.name.as_str()) {
            return Err(NestGenError::DuplicateField {
                name:        quote(&field.name),
                first_line,
                second_line: field.line,
            });
        }
        seen.insert(&field.name, field.line);
    }

    Ok(())
}

/// Tracks which struct produced each artifact name across a batch.
#[derive(Debug, Default)]
pub struct OutputClaims {
    claimed: HashMap<String, String>,
}

impl OutputClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first struct to claim `file_name` keeps it.
    pub fn claim(&mut self, file_name: &str, struct_name: &str) -> Result<(), NestGenError> {
        if let Some(owner) = self.claimed.get(file_name) {
            return Err(NestGenError::OutputConflict {
                file_name:  quote(file_name),
                claimed_by: quote(owner),
            });
        }
        self.claimed.insert(file_name.to_string(), struct_name.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
