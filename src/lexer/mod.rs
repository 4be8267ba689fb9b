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

//! Lexer module for the Minijas compiler.
//!
//! Tokenization is driven by the [`logos`] derive on [`Token`]. This
//! module attaches a 1-based source line to every token, which the
//! translator threads through to diagnostics and symbol declarations.

mod token;

pub use token::Token;

use crate::error::CompileError;
use logos::Logos;

/// Tokenize source code into a vector of tokens with their source lines.
///
/// Whitespace and comments are skipped. An unclassifiable character
/// sequence is a terminal lexical error.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, CompileError> {
    let line_starts = line_starts(source);
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let line = line_at(&line_starts, lexer.span().start);
        match result {
            Ok(token) => tokens.push((token, line)),
            Err(()) => {
                return Err(CompileError::Lex {
                    line,
                    lexeme: lexer.slice().to_string(),
                })
            }
        }
    }

    Ok(tokens)
}

/// Byte offsets at which each source line begins.
fn line_starts(source: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(source.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

/// 1-based line containing the given byte offset.
fn line_at(line_starts: &[usize], offset: usize) -> usize {
    line_starts.partition_point(|&start| start <= offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_tokenize_keywords() {
        assert_eq!(
            kinds("let mut x"),
            vec![Token::Let, Token::Mut, Token::Ident("x".to_string())]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("letter"), vec![Token::Ident("letter".to_string())]);
        assert_eq!(kinds("iffy"), vec![Token::Ident("iffy".to_string())]);
    }

    #[test]
    fn test_tokenize_literals() {
        assert_eq!(
            kinds("42 1.5 \"hi\" true false"),
            vec![
                Token::IntLit(42),
                Token::FloatLit(1.5),
                Token::StringLit("hi".to_string()),
                Token::True,
                Token::False,
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_string_literal() {
        assert_eq!(kinds("\"\""), vec![Token::StringLit(String::new())]);
    }

    #[test]
    fn test_tokenize_operators_longest_match() {
        assert_eq!(
            kinds("< << <= = == ! != && ||"),
            vec![
                Token::Less,
                Token::ShiftLeft,
                Token::LessEqual,
                Token::Assign,
                Token::EqualEqual,
                Token::Bang,
                Token::BangEqual,
                Token::AndAnd,
                Token::OrOr,
            ]
        );
    }

    #[test]
    fn test_tokenize_compound_assign() {
        assert_eq!(
            kinds("+= -= *= /= %="),
            vec![
                Token::PlusAssign,
                Token::MinusAssign,
                Token::StarAssign,
                Token::SlashAssign,
                Token::PercentAssign,
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            kinds("1 // comment\n2 /* block\ncomment */ 3"),
            vec![Token::IntLit(1), Token::IntLit(2), Token::IntLit(3)]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("let x;\nlet y;\n\nlet z;").unwrap();
        let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();
        assert_eq!(lines, vec![1, 1, 1, 2, 2, 2, 4, 4, 4]);
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("let x = @;").unwrap_err();
        assert!(matches!(err, CompileError::Lex { line: 1, .. }));
    }

    #[test]
    fn test_float_vs_int() {
        assert_eq!(
            kinds("1.25 3"),
            vec![Token::FloatLit(1.25), Token::IntLit(3)]
        );
    }
}
