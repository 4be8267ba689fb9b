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

//! Type annotation parsing.
//!
//! `&str` is accepted as a synonym for `str`. The array form
//! `[Type; N]` is accepted but its element type and length are dropped;
//! only the bare `array` tag survives.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::error::CompileError;
use crate::lexer::Token;
use crate::types::TypeTag;

/// Extension trait for type parsing.
pub(crate) trait TypeParser {
    /// Parse a type annotation.
    fn parse_type(&mut self) -> Result<TypeTag, CompileError>;
}

impl<'a> TypeParser for Parser<'a> {
    fn parse_type(&mut self) -> Result<TypeTag, CompileError> {
        match self.peek() {
            Some(Token::I32Type) => {
                self.advance();
                Ok(TypeTag::I32)
            }
            Some(Token::F32Type) => {
                self.advance();
                Ok(TypeTag::F32)
            }
            Some(Token::StrType) => {
                self.advance();
                Ok(TypeTag::Str)
            }
            Some(Token::BoolType) => {
                self.advance();
                Ok(TypeTag::Bool)
            }
            Some(Token::Ampersand) => {
                self.advance();
                self.expect(&Token::StrType, "'str'")?;
                Ok(TypeTag::Str)
            }
            Some(Token::LBracket) => {
                self.advance();
                self.parse_type()?;
                self.expect(&Token::Semicolon, "';'")?;
                self.expect(&Token::IntLit(0), "an integer literal")?;
                self.expect(&Token::RBracket, "']'")?;
                Ok(TypeTag::Array)
            }
            _ => Err(self.syntax_error("a type")),
        }
    }
}
