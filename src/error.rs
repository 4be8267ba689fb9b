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

//! Error types for the Minijas compiler.
//!
//! Two kinds of problems exist. [`Diagnostic`]s are local and non-fatal:
//! they are collected in detection order while translation continues with
//! a best-effort result, so one run surfaces as many independent errors
//! as possible. A [`CompileError`] is terminal: the input cannot be
//! lexed, or the token stream ends in a state no error recovery can
//! leave.
//!
//! Every reported problem renders as `error:<line>: <message>`.

use crate::types::TypeTag;
use std::fmt;
use thiserror::Error;

/// The kind of a recoverable diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// A name that no visible scope declares.
    UndefinedSymbol {
        /// The unresolvable name.
        name: String,
    },
    /// A binary operator applied to operands of two different types.
    TypeMismatch {
        /// Surface spelling of the operator.
        op: &'static str,
        /// Type of the left operand.
        left: TypeTag,
        /// Type of the right operand.
        right: TypeTag,
    },
    /// An assignment to a binding that was not declared `mut`.
    ImmutableAssignment {
        /// The immutable binding.
        name: String,
    },
    /// An operator applied to a type it has no instruction for.
    UnsupportedOperandType {
        /// Surface spelling of the operator.
        op: &'static str,
        /// The offending operand type.
        operand: TypeTag,
    },
    /// A unary operator applied to the wrong operand type.
    InvalidUnaryOperand {
        /// Surface spelling of the operator.
        op: &'static str,
        /// The type the operator requires.
        expected: TypeTag,
        /// The type that was found.
        got: TypeTag,
    },
    /// A recovered syntax error, already formatted with the expected set.
    Syntax {
        /// The full `syntax error, unexpected …, expecting …` message.
        message: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UndefinedSymbol { name } => write!(f, "undefined: {}", name),
            ErrorKind::TypeMismatch { op, left, right } => {
                write!(f, "mismatched types in `{}`: {} and {}", op, left, right)
            }
            ErrorKind::ImmutableAssignment { name } => write!(
                f,
                "cannot borrow immutable borrowed content `{}` as mutable",
                name
            ),
            ErrorKind::UnsupportedOperandType { op, operand } => {
                write!(
                    f,
                    "invalid operation: `{}` not supported for {}",
                    op, operand
                )
            }
            ErrorKind::InvalidUnaryOperand { op, expected, got } => write!(
                f,
                "unary `{}` can only be applied to {}, got {}",
                op, expected, got
            ),
            ErrorKind::Syntax { message } => write!(f, "{}", message),
        }
    }
}

/// A reported, recoverable problem with its source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based source line where the problem was detected.
    pub line: usize,
    /// What went wrong.
    pub kind: ErrorKind,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error:{}: {}", self.line, self.kind)
    }
}

/// An ordered collection of diagnostics for one compilation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn push(&mut self, line: usize, kind: ErrorKind) {
        self.records.push(Diagnostic { line, kind });
    }

    /// Check whether any diagnostic was recorded.
    ///
    /// Once true, the output artifact must be discarded.
    pub fn has_errors(&self) -> bool {
        !self.records.is_empty()
    }

    /// Get the number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get an iterator over the diagnostics, in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Convert into a vector of diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.records
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// A terminal compilation failure.
///
/// Distinct from recovered syntax errors: once one of these surfaces
/// from [`crate::compile`], no further input was processed and no
/// artifact exists. `Syntax` values raised inside the parser are caught
/// and downgraded to diagnostics wherever a recovery point exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// The lexer met a character sequence it cannot classify.
    #[error("error:{line}: unexpected character `{lexeme}`")]
    Lex {
        /// 1-based source line of the offending input.
        line: usize,
        /// The unclassifiable input slice.
        lexeme: String,
    },
    /// An unexpected token together with the set that was acceptable.
    #[error("error:{line}: {message}")]
    Syntax {
        /// 1-based source line of the unexpected token.
        line: usize,
        /// The full `syntax error, …` message.
        message: String,
    },
    /// The input ended inside an unfinished construct.
    #[error("error:{line}: syntax error, unexpected end of file")]
    UnexpectedEof {
        /// 1-based line of the last token seen.
        line: usize,
    },
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_format() {
        let diag = Diagnostic {
            line: 7,
            kind: ErrorKind::UndefinedSymbol {
                name: "x".to_string(),
            },
        };
        assert_eq!(diag.to_string(), "error:7: undefined: x");
    }

    #[test]
    fn test_type_mismatch_format() {
        let kind = ErrorKind::TypeMismatch {
            op: ">",
            left: TypeTag::I32,
            right: TypeTag::F32,
        };
        assert_eq!(kind.to_string(), "mismatched types in `>`: i32 and f32");
    }

    #[test]
    fn test_immutable_format() {
        let kind = ErrorKind::ImmutableAssignment {
            name: "x".to_string(),
        };
        assert_eq!(
            kind.to_string(),
            "cannot borrow immutable borrowed content `x` as mutable"
        );
    }

    #[test]
    fn test_unsupported_operand_format() {
        let kind = ErrorKind::UnsupportedOperandType {
            op: "%",
            operand: TypeTag::F32,
        };
        assert_eq!(
            kind.to_string(),
            "invalid operation: `%` not supported for f32"
        );
    }

    #[test]
    fn test_unary_format() {
        let kind = ErrorKind::InvalidUnaryOperand {
            op: "!",
            expected: TypeTag::Bool,
            got: TypeTag::I32,
        };
        assert_eq!(
            kind.to_string(),
            "unary `!` can only be applied to bool, got i32"
        );
    }

    #[test]
    fn test_diagnostics_collection() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());
        assert!(diags.is_empty());
        diags.push(
            1,
            ErrorKind::UndefinedSymbol {
                name: "y".to_string(),
            },
        );
        assert!(diags.has_errors());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_compile_error_format() {
        let err = CompileError::UnexpectedEof { line: 3 };
        assert_eq!(
            err.to_string(),
            "error:3: syntax error, unexpected end of file"
        );
    }
}
