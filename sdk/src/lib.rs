//! nestgen
//!
//! Facade over `nestgen-compiler` plus the batch driver used by the CLI.
//!
//! - `Converter`, `EngineConfig` and friends (re-exported from the compiler)
//! - `convert_directory`: one isolated outcome per input file
//! - `report_to_json`: pretty JSON for a `BatchReport`

pub mod batch;
pub mod report;

pub use nestgen_compiler::{
    compile_struct, compile_model_to_nest, output_file_name, Converter, EngineConfig, GeneratedSchema,
    SchemaOptions, TypeMap,
};
pub use nestgen_compiler::error::{NestGenError, TagError};
pub use batch::{convert_directory, process_input, BatchOptions};
pub use report::{BatchReport, InputOutcome, InputStatus};

/// Serialize a batch report into a pretty-printed JSON string.
pub fn report_to_json(report: &BatchReport) -> Result<String, NestGenError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub mod error {
    pub use nestgen_compiler::error::{NestGenError, TagError};
}

pub mod rules {
    pub use nestgen_compiler::rules::{EmissionTemplate, FieldMatcher, OverrideRule, PropOption};
}
