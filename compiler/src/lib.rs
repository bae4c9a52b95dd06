//! nestgen-compiler
//!
//! This crate implements:
//!  1) A line tokenizer + tag grammar for `json:"..." bson:"..."` tagged Go struct fields,
//!  2) The Go → Mongoose `TypeMap` and declarative field `OverrideRule`s,
//!  3) `build_model` and a verifier (duplicate fields, output name conflicts),
//!  4) Code generation (`compile_model_to_nest` → `String`),
//!  5) Error types (`NestGenError`, `TagError`) and the `Converter` pipeline.

pub mod error;
pub mod types;
pub mod utils;
pub mod tokenizer;
pub mod parser;
pub mod type_map;
pub mod rules;
pub mod config;
pub mod model;
pub mod verifier;
pub mod compiler;
pub mod gen_nest;

pub use compiler::{compile_struct, Converter, GeneratedSchema};
pub use config::{EngineConfig, SchemaOptions};
pub use gen_nest::{compile_model_to_nest, output_file_name};
pub use parser::{find_struct, parse_fields};
pub use type_map::TypeMap;
