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

//! The grammar engine of the Minijas translator.
//!
//! A recursive-descent parser that runs its semantic actions while
//! parsing: each production type-checks, manipulates scopes and emits
//! code the moment it reduces, in one forward pass with no AST and no
//! backpatching. The parser owns the [`CompilerState`] and hands it back
//! when the token stream is exhausted.
//!
//! # Module Structure
//!
//! - `helpers` - token stream navigation and error recovery
//! - `types` - type annotation parsing
//! - `expressions` - the type-checked expression translator
//! - `control_flow` - condition lowering for `if`/`while`
//! - `statements` - declarations, assignments, print, blocks, functions

pub(crate) mod control_flow;
pub(crate) mod expressions;
pub(crate) mod helpers;
pub(crate) mod statements;
pub(crate) mod types;

use helpers::ParserHelpers;
use statements::StatementParser;

use crate::error::{CompileError, ErrorKind};
use crate::lexer::Token;
use crate::state::CompilerState;

/// The parser state.
pub struct Parser<'a> {
    /// The token stream to parse.
    tokens: &'a [(Token, usize)],
    /// Current position in the token stream.
    position: usize,
    /// All shared translation state.
    pub(crate) state: CompilerState,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given token stream.
    pub fn new(tokens: &'a [(Token, usize)], state: CompilerState) -> Self {
        Self {
            tokens,
            position: 0,
            state,
        }
    }

    /// Translate the whole token stream and return the final state.
    ///
    /// Recoverable syntax errors become diagnostics and parsing resumes
    /// at the next function; only an unrecoverable failure (unexpected
    /// end of input) aborts the pass.
    pub fn run(mut self) -> Result<CompilerState, CompileError> {
        while !self.is_at_end() {
            if self.check(&Token::Func) {
                match self.parse_function() {
                    Ok(()) => {}
                    Err(CompileError::Syntax { line, message }) => {
                        self.state
                            .diagnostics
                            .push(line, ErrorKind::Syntax { message });
                        // unwind the partially-built function
                        self.state.symbols.unwind();
                        self.state.emitter.reset_indent();
                        self.recover_top_level();
                    }
                    Err(fatal) => return Err(fatal),
                }
            } else {
                let err = self.syntax_error("'func'");
                match err {
                    CompileError::Syntax { line, message } => {
                        self.state
                            .diagnostics
                            .push(line, ErrorKind::Syntax { message });
                    }
                    fatal => return Err(fatal),
                }
                self.advance();
                self.recover_top_level();
            }
        }
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    /// Translate source directly, panicking on terminal failures.
    fn translate(source: &str) -> CompilerState {
        let tokens = tokenize(source).unwrap();
        Parser::new(&tokens, CompilerState::new()).run().unwrap()
    }

    fn body_lines(state: &CompilerState) -> Vec<String> {
        state
            .emitter
            .as_str()
            .lines()
            .filter(|line| line.starts_with('\t'))
            .map(|line| line.trim_start_matches('\t').to_string())
            .collect()
    }

    // ========================================
    // Program structure
    // ========================================

    #[test]
    fn test_empty_function() {
        let state = translate("func main() { }");
        let asm = state.emitter.as_str();
        assert!(asm.contains(".method public static main([Ljava/lang/String;)V"));
        assert!(asm.contains(".limit stack 100"));
        assert!(asm.contains(".limit locals 100"));
        assert!(asm.ends_with("return\n.end method\n"));
        assert!(!state.diagnostics.has_errors());
    }

    #[test]
    fn test_secondary_function_signature() {
        let state = translate("func helper() { }");
        assert!(state
            .emitter
            .as_str()
            .contains(".method public static helper()V"));
    }

    #[test]
    fn test_two_functions_two_methods() {
        let state = translate("func main() { } func other() { }");
        let asm = state.emitter.as_str();
        assert_eq!(asm.matches(".end method").count(), 2);
        assert_eq!(state.symbols.depth(), 0);
    }

    #[test]
    fn test_statement_outside_function_is_syntax_error() {
        let tokens = tokenize("let x = 1;").unwrap();
        let state = Parser::new(&tokens, CompilerState::new()).run().unwrap();
        assert!(state.diagnostics.has_errors());
    }

    // ========================================
    // Declarations and expressions
    // ========================================

    #[test]
    fn test_let_with_initializer() {
        let state = translate("func main() { let x = 7; }");
        assert_eq!(body_lines(&state), vec!["ldc 7", "istore 0"]);
    }

    #[test]
    fn test_let_annotation_without_initializer_emits_no_store() {
        let state = translate("func main() { let x: i32; }");
        assert!(body_lines(&state).is_empty());
    }

    #[test]
    fn test_let_bool_has_no_store_instruction() {
        let state = translate("func main() { let b = true; }");
        assert_eq!(body_lines(&state), vec!["iconst_1"]);
    }

    #[test]
    fn test_precedence_mul_binds_tighter() {
        let state = translate("func main() { let x = 1 + 2 * 3; }");
        assert_eq!(
            body_lines(&state),
            vec!["ldc 1", "ldc 2", "ldc 3", "imul", "iadd", "istore 0"]
        );
    }

    #[test]
    fn test_unexpected_eof_is_terminal() {
        let tokens = tokenize("func main() { let x = 1;").unwrap();
        let result = Parser::new(&tokens, CompilerState::new()).run();
        assert!(matches!(result, Err(CompileError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_recovery_resumes_after_bad_statement() {
        let state = translate("func main() { let ; let y = 2; }");
        assert!(state.diagnostics.has_errors());
        let lines = body_lines(&state);
        assert!(lines.contains(&"ldc 2".to_string()));
    }

    #[test]
    fn test_reserved_keyword_is_syntax_error() {
        let state = translate("func main() { return; }");
        assert_eq!(state.diagnostics.len(), 1);
        let rendered = state.diagnostics.iter().next().unwrap().to_string();
        assert!(rendered.contains("unexpected 'return'"));
    }
}
