//! Compiler from pattern strings to [`Pattern`]s.

pub mod lexer;
pub mod tokens;

use crate::ast::{Pattern, PatternPart};
use crate::error::PatternError;
use lexer::Lexer;
use tokens::Token;

/// Compile a pattern string.
///
/// Adjacent literal characters and quoted spans are merged into one
/// [`PatternPart::Literal`].
pub fn compile(pattern: &str) -> Result<Pattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut parts = Vec::new();
    let mut literal = String::new();
    for spanned in Lexer::new(pattern).tokenize()? {
        match spanned.token {
            Token::Field(token) => {
                if !literal.is_empty() {
                    parts.push(PatternPart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(PatternPart::Field(token));
            }
            Token::Literal(ch) => literal.push(ch),
            Token::Quoted(text) => literal.push_str(&text),
            Token::Eof => break,
        }
    }
    if !literal.is_empty() {
        parts.push(PatternPart::Literal(literal));
    }

    Ok(Pattern::from_parts(pattern, parts))
}

impl Pattern {
    /// Compile a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for an empty pattern or an unterminated
    /// quoted span.
    pub fn compile(pattern: &str) -> Result<Pattern, PatternError> {
        compile(pattern)
    }
}
