use tracing::{debug, warn};
use crate::{
    config::EngineConfig,
    gen_nest::{compile_model_to_nest, output_file_name},
    model::{build_model, StructureModel},
    parser::{find_struct, parse_block, parse_fields},
    types::{FieldDescriptor, ParsedFields, Rejection, StructBlock},
    verifier::verify_fields,
    error::NestGenError,
};

/// One generated artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchema {
    pub struct_name: String,
    pub file_name:   String,
    pub source:      String,
    pub rejected:    Vec<Rejection>,
}

/// Parse → model → emit, with the type map, rules and class options it was built with.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: EngineConfig,
}

impl Converter {
    pub fn new(config: EngineConfig) -> Self {
        Converter { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn parse(&self, text: &str) -> ParsedFields {
        parse_fields(text)
    }

    /// Returns `Err(NestGenError::DuplicateField)` if two fields share a name.
    pub fn build(&self, struct_name: &str, fields: Vec<FieldDescriptor>) -> Result<StructureModel, NestGenError> {
        verify_fields(&fields)?;
        Ok(build_model(struct_name, fields, &self.config.types, &self.config.rules))
    }

    pub fn emit(&self, model: &StructureModel) -> String {
        compile_model_to_nest(model, &self.config.schema)
    }

    pub fn convert_block(&self, block: &StructBlock<'_>) -> Result<GeneratedSchema, NestGenError> {
        let parsed = parse_block(block);
        for rejection in &parsed.rejected {
            warn!(
                "{}: skipping line {} {:?}: {}",
                block.name, rejection.line, rejection.text, rejection.error
            );
        }

        let model = self.build(block.name, parsed.fields)?;
        debug!("{}: {} field(s)", block.name, model.fields.len());

        Ok(GeneratedSchema {
            struct_name: block.name.to_string(),
            file_name:   output_file_name(block.name),
            source:      self.emit(&model),
            rejected:    parsed.rejected,
        })
    }

    /// `Ok(None)` when the text holds no struct definition.
    pub fn convert_source(&self, text: &str) -> Result<Option<GeneratedSchema>, NestGenError> {
        match find_struct(text) {
            Some(block) => {
                debug!("found struct {} at line {}", block.name, block.line);
                self.convert_block(&block).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// Converts `text` with the default configuration.
pub fn compile_struct(text: &str) -> Result<Option<GeneratedSchema>, NestGenError> {
    Converter::default().convert_source(text)
}
