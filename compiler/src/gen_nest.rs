use crate::{
    config::SchemaOptions,
    model::{Emission, ModelField, StructureModel},
    utils::{is_ts_identifier, quote},
};

/// Artifact file name for a struct, e.g. `UserProfile` → `userprofile.schemas.ts`.
pub fn output_file_name(struct_name: &str) -> String {
    format!("{}.schemas.ts", struct_name.to_lowercase())
}

/// Renders a whole NestJS schema module for one struct. The output depends only
/// on `model` and `options`.
pub fn compile_model_to_nest(model: &StructureModel, options: &SchemaOptions) -> String {
    let name = &model.struct_name;
    let mut ts_code: Vec<String> = Vec::new();

    ts_code.push("import { Prop, Schema, SchemaFactory } from '@nestjs/mongoose';".to_string());
    ts_code.push("import * as mongoose from 'mongoose';".to_string());
    ts_code.push("".to_string());

    ts_code.push(format!("export type {}Document = mongoose.HydratedDocument<{}>;", name, name));
    ts_code.push("".to_string());

    ts_code.push(generate_schema_decorator(options));
    ts_code.push(generate_class(model));
    ts_code.push("".to_string());

    ts_code.push(format!("const {}Schema = SchemaFactory.createForClass({});", name, name));
    ts_code.push("".to_string());
    ts_code.push(format!("export {{ {}Schema, {} }};", name, name));
    ts_code.push("".to_string());

    ts_code.join("\n")
}

fn generate_schema_decorator(options: &SchemaOptions) -> String {
    let serialize = |target: &str| {
        format!(
            "  {}: {{\n    virtuals: {},\n    versionKey: {},\n  }},",
            target, options.virtuals, options.version_key
        )
    };

    [
        "@Schema({".to_string(),
        format!("  id: {},", options.id),
        format!("  timestamps: {},", options.timestamps),
        serialize("toJSON"),
        serialize("toObject"),
        "})".to_string(),
    ]
    .join("\n")
}

fn generate_class(model: &StructureModel) -> String {
    if model.fields.is_empty() {
        return format!("class {} {{}}", model.struct_name);
    }

    let props: Vec<String> = model.fields.iter().map(generate_prop).collect();
    format!("class {} {{\n{}\n}}", model.struct_name, props.join("\n\n"))
}

/// `@Prop({...})` plus the property declaration.
fn generate_prop(field: &ModelField) -> String {
    let mut metadata: Vec<String> = Vec::new();

    let ts_type = match &field.emission {
        Emission::Override { template, .. } => {
            metadata.push(format!("type: mongoose.Schema.Types.{}", template.schema_type));
            for option in &template.options {
                metadata.push(format!("{}: {}", option.key, option.value));
            }
            &template.ts_type
        }
        Emission::Generic { schema_type, ts_type, required } => {
            metadata.push(format!("type: mongoose.Schema.Types.{}", schema_type));
            if *required {
                metadata.push("required: true".to_string());
            }
            ts_type
        }
    };

    format!(
        "  @Prop({{ {} }})\n  {}: {};",
        metadata.join(", "),
        property_key(&field.field.name),
        ts_type
    )
}

fn property_key(name: &str) -> String {
    if is_ts_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}
