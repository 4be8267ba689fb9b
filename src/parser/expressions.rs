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

//! Expression translation.
//!
//! A strict precedence cascade, lowest to highest binding power:
//! or, and, relational/shift, additive, multiplicative, cast, unary,
//! primary. Every level parses left-associatively except the cast
//! suffix and unary prefixes.
//!
//! Operand code streams out bottom-up while parsing, so by the time an
//! operator's action runs, both operand values are already on the
//! evaluation stack. Each action type-checks, possibly emits the
//! operator instruction, and synthesizes the result type. On a type
//! error the operator instruction is skipped while the operand code
//! stays in the output; recovery is deliberately partial because an
//! error-flagged artifact is discarded anyway.
//!
//! A relational expression here is in *value position*: it materializes
//! an explicit 0/1 on the stack through a fresh pair of `L_true`/`L_end`
//! labels. The branching form used by `if`/`while` headers lives in
//! [`super::control_flow`].

use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::codegen::{load_for, neg_for, ArithOp, RelOp, ShiftOp};
use crate::error::{CompileError, ErrorKind};
use crate::lexer::Token;
use crate::symtab::SymbolKind;
use crate::types::TypeTag;

/// Map a token to its relational operator.
pub(crate) fn rel_op_for(token: Option<&Token>) -> Option<RelOp> {
    match token? {
        Token::Greater => Some(RelOp::Gt),
        Token::Less => Some(RelOp::Lt),
        Token::EqualEqual => Some(RelOp::Eq),
        Token::BangEqual => Some(RelOp::Ne),
        Token::GreaterEqual => Some(RelOp::Ge),
        Token::LessEqual => Some(RelOp::Le),
        _ => None,
    }
}

/// Map a token to its shift operator.
fn shift_op_for(token: Option<&Token>) -> Option<ShiftOp> {
    match token? {
        Token::ShiftLeft => Some(ShiftOp::Shl),
        Token::ShiftRight => Some(ShiftOp::Shr),
        _ => None,
    }
}

/// Extension trait for expression translation.
pub(crate) trait ExpressionParser {
    /// Parse a full expression and return its synthesized type.
    fn parse_expression(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse an `||` chain.
    fn parse_or(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse an `&&` chain.
    fn parse_and(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse a relational/shift chain.
    fn parse_relational(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse a `+`/`-` chain.
    fn parse_additive(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse a `*`/`/`/`%` chain.
    fn parse_multiplicative(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse a unary expression with an optional `as` cast suffix.
    fn parse_cast(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse a unary expression.
    fn parse_unary(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse a primary expression.
    fn parse_primary(&mut self) -> Result<TypeTag, CompileError>;

    /// Parse `IDENT [ INT_LIT ]` (array indexing, stubbed codegen).
    fn parse_array_index(&mut self) -> Result<TypeTag, CompileError>;

    /// Emit a load for an identifier and synthesize its type.
    fn load_identifier(&mut self, name: &str, line: usize) -> TypeTag;

    /// Type-check and emit a binary arithmetic operator.
    fn emit_arithmetic(
        &mut self,
        op: ArithOp,
        left: TypeTag,
        right: TypeTag,
        line: usize,
    ) -> TypeTag;

    /// Lower a relational operator in value position to an explicit 0/1.
    fn emit_relational_value(
        &mut self,
        op: RelOp,
        left: TypeTag,
        right: TypeTag,
        line: usize,
    ) -> TypeTag;

    /// Type-check and emit a shift operator.
    fn emit_shift(&mut self, op: ShiftOp, left: TypeTag, right: TypeTag, line: usize) -> TypeTag;

    /// Lower unary `!` through the true/false double-branch idiom.
    fn emit_not(&mut self, operand: TypeTag, line: usize) -> TypeTag;

    /// Emit an `as` cast conversion where one exists.
    fn emit_cast(&mut self, from: TypeTag, to: TypeTag) -> TypeTag;
}

impl<'a> ExpressionParser for Parser<'a> {
    fn parse_expression(&mut self) -> Result<TypeTag, CompileError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<TypeTag, CompileError> {
        let mut ty = self.parse_and()?;
        while self.match_token(&Token::OrOr) {
            // eager: the right operand always evaluates before the `ior`
            self.parse_and()?;
            self.state.emitter.line("ior");
            ty = TypeTag::Bool;
        }
        Ok(ty)
    }

    fn parse_and(&mut self) -> Result<TypeTag, CompileError> {
        let mut ty = self.parse_relational()?;
        while self.match_token(&Token::AndAnd) {
            self.parse_relational()?;
            self.state.emitter.line("iand");
            ty = TypeTag::Bool;
        }
        Ok(ty)
    }

    fn parse_relational(&mut self) -> Result<TypeTag, CompileError> {
        let mut ty = self.parse_additive()?;
        loop {
            if let Some(op) = rel_op_for(self.peek()) {
                let line = self.current_line();
                self.advance();
                let right = self.parse_additive()?;
                ty = self.emit_relational_value(op, ty, right, line);
            } else if let Some(op) = shift_op_for(self.peek()) {
                let line = self.current_line();
                self.advance();
                let right = self.parse_additive()?;
                ty = self.emit_shift(op, ty, right, line);
            } else {
                return Ok(ty);
            }
        }
    }

    fn parse_additive(&mut self) -> Result<TypeTag, CompileError> {
        let mut ty = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                Some(Token::Plus) => ArithOp::Add,
                Some(Token::Minus) => ArithOp::Sub,
                _ => return Ok(ty),
            };
            let line = self.current_line();
            self.advance();
            let right = self.parse_multiplicative()?;
            ty = self.emit_arithmetic(op, ty, right, line);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<TypeTag, CompileError> {
        let mut ty = self.parse_cast()?;
        loop {
            let op = match self.peek() {
                Some(Token::Star) => ArithOp::Mul,
                Some(Token::Slash) => ArithOp::Div,
                Some(Token::Percent) => ArithOp::Rem,
                _ => return Ok(ty),
            };
            let line = self.current_line();
            self.advance();
            // the right operand of a multiplicative operator is a bare
            // unary expression, so a cast there needs parentheses
            let right = self.parse_unary()?;
            ty = self.emit_arithmetic(op, ty, right, line);
        }
    }

    fn parse_cast(&mut self) -> Result<TypeTag, CompileError> {
        let ty = self.parse_unary()?;
        if self.match_token(&Token::As) {
            let target = self.parse_type()?;
            return Ok(self.emit_cast(ty, target));
        }
        Ok(ty)
    }

    fn parse_unary(&mut self) -> Result<TypeTag, CompileError> {
        if self.match_token(&Token::Minus) {
            let ty = self.parse_unary()?;
            if let Some(instruction) = neg_for(ty) {
                self.state.emitter.line(instruction);
            }
            return Ok(ty);
        }
        if self.check(&Token::Bang) {
            let line = self.current_line();
            self.advance();
            let ty = self.parse_unary()?;
            return Ok(self.emit_not(ty, line));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<TypeTag, CompileError> {
        if matches!(self.peek(), Some(Token::Ident(_)))
            && matches!(self.peek_ahead(1), Some(Token::LBracket))
        {
            return self.parse_array_index();
        }

        let Some((token, line)) = self.advance() else {
            return Err(self.syntax_error("an expression"));
        };

        match token {
            Token::IntLit(value) => {
                self.state.emitter.line(&format!("ldc {}", value));
                Ok(TypeTag::I32)
            }
            Token::FloatLit(value) => {
                self.state.emitter.line(&format!("ldc {:.6}", value));
                Ok(TypeTag::F32)
            }
            Token::StringLit(text) => {
                self.state.emitter.line(&format!("ldc \"{}\"", text));
                Ok(TypeTag::Str)
            }
            Token::True => {
                self.state.emitter.line("iconst_1");
                Ok(TypeTag::Bool)
            }
            Token::False => {
                self.state.emitter.line("iconst_0");
                Ok(TypeTag::Bool)
            }
            Token::Ident(name) => Ok(self.load_identifier(&name, line)),
            Token::LParen => {
                let ty = self.parse_expression()?;
                self.expect(&Token::RParen, "')'")?;
                Ok(ty)
            }
            Token::LBracket => {
                // array literal: elements evaluate left to right, the
                // aggregate itself generates no code
                self.parse_expression()?;
                while self.match_token(&Token::Comma) {
                    self.parse_expression()?;
                }
                self.expect(&Token::RBracket, "']'")?;
                Ok(TypeTag::Array)
            }
            other => Err(CompileError::Syntax {
                line,
                message: format!(
                    "syntax error, unexpected {}, expecting an expression",
                    other.name()
                ),
            }),
        }
    }

    fn parse_array_index(&mut self) -> Result<TypeTag, CompileError> {
        let (name, line) = self.expect_identifier()?;
        self.expect(&Token::LBracket, "'['")?;
        self.expect(&Token::IntLit(0), "an integer literal")?;
        self.expect(&Token::RBracket, "']'")?;
        if self.state.symbols.resolve(&name).is_none() {
            self.state
                .diagnostics
                .push(line, ErrorKind::UndefinedSymbol { name });
        }
        Ok(TypeTag::Array)
    }

    fn load_identifier(&mut self, name: &str, line: usize) -> TypeTag {
        let resolved = self
            .state
            .symbols
            .resolve(name)
            .map(|symbol| (symbol.kind, symbol.address));
        match resolved {
            Some((SymbolKind::Variable(ty), address)) => {
                if let Some(instruction) = load_for(ty) {
                    self.state
                        .emitter
                        .line(&format!("{} {}", instruction, address));
                }
                ty
            }
            // a function name carries no loadable value
            Some((SymbolKind::Function, _)) | None => {
                self.state.diagnostics.push(
                    line,
                    ErrorKind::UndefinedSymbol {
                        name: name.to_string(),
                    },
                );
                TypeTag::Undefined
            }
        }
    }

    fn emit_arithmetic(
        &mut self,
        op: ArithOp,
        left: TypeTag,
        right: TypeTag,
        line: usize,
    ) -> TypeTag {
        // an undefined operand already produced a diagnostic at its use
        if left == TypeTag::Undefined || right == TypeTag::Undefined {
            return left;
        }
        if left != right {
            self.state.diagnostics.push(
                line,
                ErrorKind::TypeMismatch {
                    op: op.symbol(),
                    left,
                    right,
                },
            );
            return left;
        }
        match op.instruction(left) {
            Some(instruction) => self.state.emitter.line(instruction),
            None => self.state.diagnostics.push(
                line,
                ErrorKind::UnsupportedOperandType {
                    op: op.symbol(),
                    operand: left,
                },
            ),
        }
        left
    }

    fn emit_relational_value(
        &mut self,
        op: RelOp,
        left: TypeTag,
        right: TypeTag,
        line: usize,
    ) -> TypeTag {
        let id = self.state.labels.next_id();
        if left != right {
            self.state.diagnostics.push(
                line,
                ErrorKind::TypeMismatch {
                    op: op.symbol(),
                    left,
                    right,
                },
            );
        } else if left == TypeTag::I32 {
            self.state
                .emitter
                .line(&format!("{} L_true_{}", op.int_branch(), id));
        } else if left == TypeTag::F32 {
            self.state.emitter.line("fcmpl");
            self.state
                .emitter
                .line(&format!("{} L_true_{}", op.float_branch(), id));
        }
        self.state.emitter.line("iconst_0");
        self.state.emitter.line(&format!("goto L_end_{}", id));
        self.state.emitter.line(&format!("L_true_{}:", id));
        self.state.emitter.line("iconst_1");
        self.state.emitter.line(&format!("L_end_{}:", id));
        TypeTag::Bool
    }

    fn emit_shift(&mut self, op: ShiftOp, left: TypeTag, right: TypeTag, line: usize) -> TypeTag {
        if left == TypeTag::I32 && right == TypeTag::I32 {
            self.state.emitter.line(op.instruction());
        } else {
            let operand = if left != TypeTag::I32 { left } else { right };
            self.state.diagnostics.push(
                line,
                ErrorKind::UnsupportedOperandType {
                    op: op.symbol(),
                    operand,
                },
            );
        }
        TypeTag::I32
    }

    fn emit_not(&mut self, operand: TypeTag, line: usize) -> TypeTag {
        if operand != TypeTag::Bool {
            self.state.diagnostics.push(
                line,
                ErrorKind::InvalidUnaryOperand {
                    op: "!",
                    expected: TypeTag::Bool,
                    got: operand,
                },
            );
            return TypeTag::Bool;
        }
        let id = self.state.labels.next_id();
        self.state.emitter.line(&format!("ifeq L_true_{}", id));
        self.state.emitter.line("iconst_0");
        self.state.emitter.line(&format!("goto L_end_{}", id));
        self.state.emitter.line(&format!("L_true_{}:", id));
        self.state.emitter.line("iconst_1");
        self.state.emitter.line(&format!("L_end_{}:", id));
        TypeTag::Bool
    }

    fn emit_cast(&mut self, from: TypeTag, to: TypeTag) -> TypeTag {
        match (from, to) {
            (TypeTag::F32, TypeTag::I32) => self.state.emitter.line("f2i"),
            (TypeTag::I32, TypeTag::F32) => self.state.emitter.line("i2f"),
            // every other pairing converts nothing; the tag still changes
            _ => {}
        }
        to
    }
}
