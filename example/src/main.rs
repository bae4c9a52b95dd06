// example/src/main.rs

use nestgen::*;
use nestgen::rules::OverrideRule;

const PROFILE: &str = r#"
package models

import "time"

type Profile struct {
	ID          string        `json:"id" bson:"_id"`
	DisplayName string        `json:"displayName" bson:"displayName"`
	Bio         string        `json:"bio,omitempty" bson:"bio,omitempty"`
	Followers   int64         `json:"followers" bson:"followers"`
	Tags        []string      `json:"tags,omitempty" bson:"tags,omitempty"`
	Timeout     time.Duration `json:"timeout" bson:"timeout"`
	CreatedAt   time.Time     `json:"createdAt" bson:"createdAt"`
	UpdatedAt   time.Time     `json:"updatedAt" bson:"updatedAt"`
}
"#;

fn main() -> Result<(), NestGenError> {
    // Default tables: `_id` and the timestamps get their fixed templates.
    if let Some(schema) = compile_struct(PROFILE)? {
        println!("// {}\n{}", schema.file_name, schema.source);
    }

    // Same struct, but only the timestamp rule and no class-level timestamps.
    let config = EngineConfig {
        rules: vec![OverrideRule::timestamps()],
        schema: SchemaOptions {
            timestamps: false,
            ..SchemaOptions::default()
        },
        ..EngineConfig::default()
    };
    let converter = Converter::new(config);
    if let Some(schema) = converter.convert_source(PROFILE)? {
        println!("// {} (custom config)\n{}", schema.file_name, schema.source);
    }

    Ok(())
}
