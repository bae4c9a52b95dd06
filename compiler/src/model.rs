use crate::{
    rules::{find_override, EmissionTemplate, OverrideRule},
    type_map::{typescript_type, TypeMap},
    types::FieldDescriptor,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Emission {
    /// Fixed template from the named rule.
    Override {
        rule:     String,
        template: EmissionTemplate,
    },
    Generic {
        schema_type: String,
        ts_type:     String,
        required:    bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelField {
    pub field:    FieldDescriptor,
    pub emission: Emission,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructureModel {
    pub struct_name: String,
    pub fields:      Vec<ModelField>,
}

/// Attaches an emission to each field, keeping source order. Rules are checked
/// before the type map.
pub fn build_model(
    struct_name: &str,
    fields: Vec<FieldDescriptor>,
    types: &TypeMap,
    rules: &[OverrideRule],
) -> StructureModel {
    let fields = fields
        .into_iter()
        .map(|field| {
            let emission = match find_override(rules, &field) {
                Some(rule) => Emission::Override {
                    rule:     rule.name.clone(),
                    template: rule.template.clone(),
                },
                None => {
                    let schema_type = types.resolve(&field.source_type);
                    Emission::Generic {
                        schema_type: schema_type.to_string(),
                        ts_type:     typescript_type(schema_type).to_string(),
                        required:    field.required,
                    }
                }
            };
            ModelField { field, emission }
        })
        .collect();

    StructureModel {
        struct_name: struct_name.to_string(),
        fields,
    }
}
