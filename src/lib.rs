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

//! Minijas Compiler Library
//!
//! A single-pass, syntax-directed translator for a small statically
//! typed, Rust-flavored language, emitting textual JVM stack-machine
//! assembly. Code is generated while parsing; there is no AST.
//!
//! # Modules
//!
//! - [`error`] - diagnostics and terminal error types
//! - [`lexer`] - tokenization of source code
//! - [`types`] - static type tags
//! - [`symtab`] - lexically scoped symbol table
//! - [`codegen`] - instruction vocabulary, labels and the emitter
//! - [`parser`] - the grammar engine with emitting semantic actions
//!
//! # Example
//!
//! ```
//! let source = r#"
//! func main() {
//!     let mut x: i32 = 1;
//!     while x < 3 {
//!         x += 1;
//!     }
//!     println x;
//! }
//! "#;
//!
//! let output = minijas::compile(source).unwrap();
//! assert!(!output.has_errors());
//! assert!(output.assembly.contains("if_icmpge L_end_0"));
//! ```

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod state;
pub mod symtab;
pub mod types;

// Re-export commonly used types
pub use codegen::RelOp;
pub use error::{CompileError, Diagnostic, Diagnostics, ErrorKind};
pub use lexer::Token;
pub use state::CompilerState;
pub use symtab::SymbolTable;
pub use types::TypeTag;

use parser::Parser;

/// The version of the Minijas compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "Minijas";

/// Everything one compilation produces.
#[derive(Debug)]
pub struct CompileOutput {
    /// The assembly artifact. Only meaningful when no diagnostics were
    /// reported; callers must discard it otherwise.
    pub assembly: String,
    /// The scope-lifecycle trace (create/insert/dump lines).
    pub trace: String,
    /// Recoverable diagnostics, in detection order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of source lines processed.
    pub total_lines: usize,
}

impl CompileOutput {
    /// Check whether the compilation reported any error.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Compile source code to JVM assembly text.
///
/// This is the main entry point. It runs the whole single pass: lexing,
/// then parse-and-emit. Recoverable problems land in
/// [`CompileOutput::diagnostics`]; a terminal failure (lexical error or
/// unrecoverable syntax error) is returned as `Err`.
pub fn compile(source: &str) -> Result<CompileOutput, CompileError> {
    compile_with_source_name(source, "Main.j")
}

/// Compile source code, naming the artifact in its `.source` header.
pub fn compile_with_source_name(
    source: &str,
    source_name: &str,
) -> Result<CompileOutput, CompileError> {
    let tokens = lexer::tokenize(source)?;

    let mut state = CompilerState::new();
    state.emitter.line(&format!(".source {}", source_name));
    state.emitter.line(".class public Main");
    state.emitter.line(".super java/lang/Object");

    let state = Parser::new(&tokens, state).run()?;

    Ok(CompileOutput {
        assembly: state.emitter.into_string(),
        trace: state.symbols.into_trace(),
        diagnostics: state.diagnostics.into_vec(),
        total_lines: source.lines().count(),
    })
}
