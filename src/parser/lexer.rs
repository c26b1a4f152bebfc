//! Lexer for tokenizing pattern strings.
//!
//! Field tokens are matched longest first (`MMMM` before `MMM` before `MM`).
//! Single quotes start a literal span; `''` is a literal quote both inside and
//! outside such a span. Every other character is a literal.

use crate::ast::FieldToken;
use crate::error::PatternError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = if ch == '\'' {
            self.lex_quoted()?
        } else if let Some(field) = self.try_match_field() {
            Token::Field(field)
        } else {
            self.advance();
            Token::Literal(ch)
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn remaining(&self) -> &str {
        &self.input[self.position..]
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    fn try_match_field(&mut self) -> Option<FieldToken> {
        let remaining = self.remaining();
        let (text, token) = FieldToken::SPELLINGS
            .iter()
            .find(|(text, _)| remaining.starts_with(text))?;
        self.position += text.len();
        Some(*token)
    }

    /// Lexes `'...'`, or `''` as a single quote.
    fn lex_quoted(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance();

        if self.current_char() == Some('\'') {
            self.advance();
            return Ok(Token::Quoted("'".to_string()));
        }

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    if self.current_char() == Some('\'') {
                        content.push('\'');
                        self.advance();
                    } else {
                        return Ok(Token::Quoted(content));
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Returns all remaining tokens, ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}
