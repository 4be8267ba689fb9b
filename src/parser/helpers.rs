// Minijas - A single-pass compiler for a Rust-flavored mini-language targeting JVM assembly
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Parser helper methods for token stream navigation and error handling.
//!
//! Syntax errors carry the unexpected token and the set of tokens that
//! would have been acceptable. Recovery discards tokens up to the next
//! statement boundary (`;`, `}`) or the next `func` at top level, after
//! which normal parsing resumes.

use super::Parser;
use crate::error::CompileError;
use crate::lexer::Token;

/// Trait for parser helper operations.
pub(crate) trait ParserHelpers {
    /// Check if we've reached the end of the token stream.
    fn is_at_end(&self) -> bool;

    /// Peek at the current token without advancing.
    fn peek(&self) -> Option<&Token>;

    /// Peek at a token ahead by n positions.
    fn peek_ahead(&self, n: usize) -> Option<&Token>;

    /// Source line of the current token (or of the last one at EOF).
    fn current_line(&self) -> usize;

    /// Advance to the next token and return the current one.
    fn advance(&mut self) -> Option<(Token, usize)>;

    /// Check if the current token matches the expected kind.
    fn check(&self, expected: &Token) -> bool;

    /// Consume the current token if it matches the expected kind.
    fn match_token(&mut self, expected: &Token) -> bool;

    /// Expect the current token to match, or return a syntax error
    /// naming the expected set.
    fn expect(&mut self, expected: &Token, expected_set: &str) -> Result<(Token, usize), CompileError>;

    /// Expect an identifier and return its name and line.
    fn expect_identifier(&mut self) -> Result<(String, usize), CompileError>;

    /// Create a syntax error at the current position. At end of input
    /// this is the terminal end-of-file failure.
    fn syntax_error(&self, expected_set: &str) -> CompileError;

    /// Discard tokens to the next statement boundary: past the next `;`
    /// or a whole balanced block, stopping at `}`, `func` or input end.
    fn recover_statement(&mut self);

    /// Discard tokens until the next `func` or end of input.
    fn recover_top_level(&mut self);
}

impl<'a> ParserHelpers for Parser<'a> {
    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|(t, _)| t)
    }

    fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n).map(|(t, _)| t)
    }

    fn current_line(&self) -> usize {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let result = self.tokens.get(self.position).cloned();
        if result.is_some() {
            self.position += 1;
        }
        result
    }

    fn check(&self, expected: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(expected))
    }

    fn match_token(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(
        &mut self,
        expected: &Token,
        expected_set: &str,
    ) -> Result<(Token, usize), CompileError> {
        if self.check(expected) {
            Ok(self.advance().expect("checked token present"))
        } else {
            Err(self.syntax_error(expected_set))
        }
    }

    fn expect_identifier(&mut self) -> Result<(String, usize), CompileError> {
        match self.peek() {
            Some(Token::Ident(_)) => {
                let (token, line) = self.advance().expect("checked token present");
                match token {
                    Token::Ident(name) => Ok((name, line)),
                    _ => unreachable!("peeked an identifier"),
                }
            }
            _ => Err(self.syntax_error("an identifier")),
        }
    }

    fn syntax_error(&self, expected_set: &str) -> CompileError {
        match self.tokens.get(self.position) {
            Some((token, line)) => CompileError::Syntax {
                line: *line,
                message: format!(
                    "syntax error, unexpected {}, expecting {}",
                    token.name(),
                    expected_set
                ),
            },
            None => CompileError::UnexpectedEof {
                line: self.current_line(),
            },
        }
    }

    fn recover_statement(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.peek() {
                None => return,
                Some(Token::LBrace) => {
                    depth += 1;
                    self.advance();
                }
                Some(Token::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    self.advance();
                    // a whole balanced block is a statement boundary
                    if depth == 0 {
                        return;
                    }
                }
                Some(Token::Semicolon) if depth == 0 => {
                    self.advance();
                    return;
                }
                Some(Token::Func) if depth == 0 => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    fn recover_top_level(&mut self) {
        while !self.is_at_end() && !self.check(&Token::Func) {
            self.advance();
        }
    }
}
