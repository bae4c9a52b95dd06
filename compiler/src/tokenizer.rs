use regex::Regex;
use lazy_static::lazy_static;
use crate::utils::quote;
use crate::error::TagError;

lazy_static! {
    pub static ref TOKEN_REGEX: Regex = Regex::new(r"(`[^`]*`|//.*|;|[^`;/]+|/)").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Anything outside a tag: names, types, whitespace.
    Text,
    Tag,
    Separator,
}

#[derive(Debug, PartialEq)]
pub struct Token {
    pub kind:   TokenKind,
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

impl Token {
    pub fn is_blank(&self) -> bool {
        self.kind == TokenKind::Text && self.text.trim().is_empty()
    }

    /// Column of the first non-whitespace character.
    pub fn content_column(&self) -> usize {
        self.column + (self.text.len() - self.text.trim_start().len())
    }
}

/// Splits one struct body line into raw backtick tags, `;` separators and the
/// text around them. `//` comments are dropped. Only an unterminated tag fails.
pub fn tokenize_line(text: &str, line: usize) -> Result<Vec<Token>, TagError> {
    let mut tokens   = Vec::new();
    let mut last_end = 0;

    for mat in TOKEN_REGEX.find_iter(text) {
        let start = mat.start();
        let part  = mat.as_str();

        if start > last_end {
            return Err(TagError::UnexpectedCharacter {
                text:   quote(&text[last_end..start]),
                line,
                column: last_end + 1,
            });
        }
        last_end = mat.end();

        if part.starts_with("//") {
            continue;
        }

        let kind = if part.starts_with('`') {
            TokenKind::Tag
        } else if part == ";" {
            TokenKind::Separator
        } else {
            TokenKind::Text
        };

        tokens.push(Token {
            kind,
            text:   part.to_string(),
            line,
            column: start + 1,
        });
    }

    if last_end != text.len() {
        return Err(TagError::UnexpectedCharacter {
            text:   quote(&text[last_end..]),
            line,
            column: last_end + 1,
        });
    }

    Ok(tokens)
}
