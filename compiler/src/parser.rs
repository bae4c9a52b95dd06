use crate::{
    tokenizer::{tokenize_line, Token, TokenKind},
    types::{FieldDescriptor, ParsedFields, Rejection, StructBlock},
    utils::{line_at, quote},
    error::TagError,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STRUCT_BLOCK: Regex = Regex::new(r"type\s+([A-Za-z0-9_]+)\s+struct\s*\{([^}]*)\}").unwrap();
    static ref TYPE_AT_END:  Regex = Regex::new(r"([A-Za-z0-9_]+)\s*$").unwrap();
    static ref TAG_ENTRY:    Regex = Regex::new(r#"^([A-Za-z0-9_]+):"([^"]*)""#).unwrap();
    static ref TAG_NAME:     Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

const OMITEMPTY: &str = "omitempty";

struct TagEntry<'a> {
    key:    &'a str,
    value:  &'a str,
}

struct TagValue {
    name:      String,
    omitempty: bool,
}

/// Finds the first `type Name struct { ... }` block. The body ends at the first
/// closing brace, so nested struct literals are not supported.
pub fn find_struct(text: &str) -> Option<StructBlock<'_>> {
    let caps = STRUCT_BLOCK.captures(text)?;
    let name = caps.get(1)?;
    let body = caps.get(2)?;
    Some(StructBlock {
        name: name.as_str(),
        body: body.as_str(),
        line: line_at(text, body.start()),
    })
}

/// Parses every line of `text` as tagged fields. Line numbers start at 1.
pub fn parse_fields(text: &str) -> ParsedFields {
    parse_fields_from(text, 1)
}

pub fn parse_block(block: &StructBlock<'_>) -> ParsedFields {
    parse_fields_from(block.body, block.line)
}

fn parse_fields_from(text: &str, first_line: usize) -> ParsedFields {
    let mut parsed = ParsedFields::default();

    for (offset, raw) in text.lines().enumerate() {
        let line = parse_line(raw, first_line + offset);
        parsed.fields.extend(line.fields);
        parsed.rejected.extend(line.rejected);
    }

    parsed
}

/// Parses one line, which may hold several `;` separated fields.
/// Blank and comment-only statements produce nothing.
pub fn parse_line(text: &str, line: usize) -> ParsedFields {
    let mut parsed = ParsedFields::default();

    let tokens = match tokenize_line(text, line) {
        Ok(tokens) => tokens,
        Err(error) => {
            parsed.rejected.push(Rejection {
                line,
                column: error.column().unwrap_or(1),
                text:   text.trim().to_string(),
                error,
            });
            return parsed;
        }
    };

    for statement in tokens.split(|t| t.kind == TokenKind::Separator) {
        match parse_statement(statement, line) {
            Ok(Some(field)) => parsed.fields.push(field),
            Ok(None) => {}
            Err(error) => parsed.rejected.push(Rejection {
                line,
                column: error.column().or_else(|| first_column(statement)).unwrap_or(1),
                text:   statement_text(statement),
                error,
            }),
        }
    }

    parsed
}

/// `[names] TypeExpr Tag`. Only the identifier directly before the tag is read;
/// whatever precedes it is not checked.
fn parse_statement(tokens: &[Token], line: usize) -> Result<Option<FieldDescriptor>, TagError> {
    let tag_index = match tokens.iter().position(|t| t.kind == TokenKind::Tag) {
        Some(index) => index,
        None if tokens.iter().all(Token::is_blank) => return Ok(None),
        None => return Err(TagError::MissingTag { line }),
    };

    if let Some(extra) = tokens[tag_index + 1..].iter().find(|t| !t.is_blank()) {
        return Err(TagError::UnexpectedCharacter {
            text:   quote(extra.text.trim()),
            line,
            column: extra.content_column(),
        });
    }

    let head: String = tokens[..tag_index].iter().map(|t| t.text.as_str()).collect();
    let source_type = TYPE_AT_END
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .ok_or(TagError::MissingType { line })?;

    let (json, bson) = parse_tag(&tokens[tag_index])?;

    Ok(Some(FieldDescriptor {
        name:        bson.name,
        source_type: source_type.as_str().to_string(),
        required:    !json.omitempty,
        line,
        column:      first_column(tokens).unwrap_or(tokens[tag_index].column),
    }))
}

fn first_column(tokens: &[Token]) -> Option<usize> {
    tokens.iter().find(|t| !t.is_blank()).map(Token::content_column)
}

fn statement_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect::<String>().trim().to_string()
}

/// Reads the `json:"..."` entry and the `bson:"..."` entry directly after it.
fn parse_tag(tag: &Token) -> Result<(TagValue, TagValue), TagError> {
    let line    = tag.line;
    let inner   = tag.text.trim_matches('`');
    let entries = parse_tag_entries(inner, line, tag.column + 1)?;

    let found = |index: usize| -> String {
        entries
            .get(index)
            .map(|e| quote(e.key))
            .unwrap_or_else(|| "end of tag".to_string())
    };

    let json = match entries.first() {
        Some(entry) if entry.key == "json" => parse_tag_value("json", entry.value, line)?,
        _ => return Err(TagError::MissingEntry { key: "json", found: found(0), line }),
    };
    let bson = match entries.get(1) {
        Some(entry) if entry.key == "bson" => parse_tag_value("bson", entry.value, line)?,
        _ => return Err(TagError::MissingEntry { key: "bson", found: found(1), line }),
    };

    Ok((json, bson))
}

fn parse_tag_entries(inner: &str, line: usize, column: usize) -> Result<Vec<TagEntry<'_>>, TagError> {
    let mut entries = Vec::new();
    let mut rest    = inner.trim_start();

    while !rest.is_empty() {
        let caps = TAG_ENTRY.captures(rest).ok_or_else(|| TagError::MalformedEntry {
            text:   quote(rest),
            line,
            column: column + (inner.len() - rest.len()),
        })?;
        let whole = caps.get(0).map_or(0, |m| m.end());
        if let (Some(key), Some(value)) = (caps.get(1), caps.get(2)) {
            entries.push(TagEntry {
                key:   key.as_str(),
                value: value.as_str(),
            });
        }
        rest = rest[whole..].trim_start();
    }

    Ok(entries)
}

fn parse_tag_value(key: &'static str, value: &str, line: usize) -> Result<TagValue, TagError> {
    let (name, option) = match value.split_once(',') {
        Some((name, option)) => (name, Some(option)),
        None => (value, None),
    };

    if !TAG_NAME.is_match(name) {
        return Err(TagError::InvalidName { key, text: quote(name), line });
    }

    let omitempty = match option {
        None => false,
        Some(OMITEMPTY) => true,
        Some(other) => {
            return Err(TagError::UnsupportedOption { key, text: quote(other), line });
        }
    };

    Ok(TagValue {
        name: name.to_string(),
        omitempty,
    })
}
