//! Token types for the pattern lexer.

use crate::ast::FieldToken;

/// A token in a pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Field(FieldToken),
    Literal(char),
    /// Content of a single-quoted span, with `''` already unescaped.
    Quoted(String),
    Eof,
}

/// A token with its byte span in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
