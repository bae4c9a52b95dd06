use serde::Deserialize;
use crate::types::FieldDescriptor;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMatcher {
    Exact(String),
    IgnoreCase(Vec<String>),
}

impl FieldMatcher {
    pub fn matches(&self, name: &str) -> bool {
        match self {
            FieldMatcher::Exact(expected) => expected == name,
            FieldMatcher::IgnoreCase(names) => names.iter().any(|n| n.eq_ignore_ascii_case(name)),
        }
    }
}

/// A `key: value` pair written verbatim into the `@Prop` metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropOption {
    pub key:   String,
    pub value: String,
}

/// Fixed emission for a field caught by an [`OverrideRule`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmissionTemplate {
    pub schema_type: String,
    pub ts_type:     String,
    #[serde(default)]
    pub options:     Vec<PropOption>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverrideRule {
    pub name:     String,
    pub matcher:  FieldMatcher,
    pub template: EmissionTemplate,
}

impl OverrideRule {
    /// `_id` becomes an auto-generated ObjectId.
    pub fn identity() -> Self {
        OverrideRule {
            name:     "identity".to_string(),
            matcher:  FieldMatcher::Exact("_id".to_string()),
            template: EmissionTemplate {
                schema_type: "ObjectId".to_string(),
                ts_type:     "mongoose.Types.ObjectId".to_string(),
                options:     vec![PropOption {
                    key:   "default".to_string(),
                    value: "() => new mongoose.Types.ObjectId()".to_string(),
                }],
            },
        }
    }

    /// `createdAt` / `updatedAt` in any casing become plain dates.
    pub fn timestamps() -> Self {
        OverrideRule {
            name:     "timestamps".to_string(),
            matcher:  FieldMatcher::IgnoreCase(vec!["createdat".to_string(), "updatedat".to_string()]),
            template: EmissionTemplate {
                schema_type: "Date".to_string(),
                ts_type:     "Date".to_string(),
                options:     Vec::new(),
            },
        }
    }

    pub fn matches(&self, field: &FieldDescriptor) -> bool {
        self.matcher.matches(&field.name)
    }
}

pub fn default_rules() -> Vec<OverrideRule> {
    vec![OverrideRule::identity(), OverrideRule::timestamps()]
}

/// First matching rule wins.
pub fn find_override<'r>(rules: &'r [OverrideRule], field: &FieldDescriptor) -> Option<&'r OverrideRule> {
    rules.iter().find(|rule| rule.matches(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, source_type: &str) -> FieldDescriptor {
        FieldDescriptor {
            name:        name.into(),
            source_type: source_type.into(),
            required:    true,
            line:        1,
            column:      1,
        }
    }

    #[test]
    fn test_identity_rule_ignores_source_type() {
        let rules = default_rules();
        for ty in ["string", "ObjectID", "int64", "Whatever"] {
            let rule = find_override(&rules, &field("_id", ty)).expect("identity rule");
            assert_eq!(rule.name, "identity");
        }
        assert!(find_override(&rules, &field("_ID", "string")).is_none());
        assert!(find_override(&rules, &field("id", "string")).is_none());
    }

    #[test]
    fn test_timestamp_rule_is_case_insensitive() {
        let rules = default_rules();
        for name in ["createdAt", "CREATEDAT", "updatedat", "UpdatedAt"] {
            let rule = find_override(&rules, &field(name, "string")).expect("timestamp rule");
            assert_eq!(rule.name, "timestamps");
            assert_eq!(rule.template.schema_type, "Date");
        }
        assert!(find_override(&rules, &field("created_at", "Time")).is_none());
        assert!(find_override(&rules, &field("deletedAt", "Time")).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut catch_all = OverrideRule::timestamps();
        catch_all.name = "custom".to_string();
        catch_all.matcher = FieldMatcher::IgnoreCase(vec!["_id".to_string()]);

        let rules = vec![catch_all, OverrideRule::identity()];
        assert_eq!(find_override(&rules, &field("_id", "string")).unwrap().name, "custom");
    }

    #[test]
    fn test_deserialize_rule() {
        let rule: OverrideRule = serde_json::from_str(r#"{
            "name": "version",
            "matcher": { "exact": "__v" },
            "template": {
                "schema_type": "Number",
                "ts_type": "number",
                "options": [{ "key": "select", "value": "false" }]
            }
        }"#).unwrap();
        assert!(rule.matches(&field("__v", "int")));
        assert_eq!(rule.template.options[0].key, "select");
    }
}
