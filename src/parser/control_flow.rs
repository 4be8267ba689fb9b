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

//! Control-flow lowering for `if` and `while`.
//!
//! A relational expression in an `if`/`while` header is in *condition
//! position*: it compiles to operand evaluation followed by exactly one
//! conditional branch, instead of materializing a 0/1 value.
//!
//! `if` branches with the written (direct) sense *into* the body and
//! falls through to the else entry:
//!
//! ```text
//! if_icmpgt L_if_N      goto L_else_N      L_if_N:
//! <then>                goto L_end_N       L_else_N:
//! <else>                L_end_N:
//! ```
//!
//! `while` tests-and-exits on every iteration: the branch uses the
//! *inverted* sense and jumps out to the end label when the condition no
//! longer holds. The loop-top label is emitted before the condition is
//! parsed, so the condition re-evaluates on every pass, including the
//! zero-iteration case:
//!
//! ```text
//! L_loop_N:
//! <operands>  if_icmple L_end_N  <body>  goto L_loop_N  L_end_N:
//! ```
//!
//! Emission happens while parsing, before the rest of the statement is
//! known, so each construct mints its label id at a fixed point: `while`
//! when the header opens (the loop label must precede the condition),
//! `if` when its branch is lowered (after the operands, keeping ids in
//! emission order relative to nested value-position expressions).

use super::expressions::{rel_op_for, ExpressionParser};
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::codegen::RelOp;
use crate::error::{CompileError, ErrorKind};
use crate::lexer::Token;
use crate::types::TypeTag;

/// Extension trait for control-flow statement translation.
pub(crate) trait ControlFlowParser {
    /// Parse and lower an `if` statement (with optional `else`).
    fn parse_if(&mut self) -> Result<(), CompileError>;

    /// Parse and lower a `while` statement.
    fn parse_while(&mut self) -> Result<(), CompileError>;

    /// Parse an `if` header condition; mints and returns the statement's
    /// label id and emits the direct-sense branch to `L_if_<id>`.
    fn parse_if_condition(&mut self) -> Result<u32, CompileError>;

    /// Parse a `while` header condition for the given label id, emitting
    /// the inverted-sense branch to `L_end_<id>`.
    fn parse_while_condition(&mut self, id: u32) -> Result<(), CompileError>;

    /// Expect one of the six relational operators.
    fn expect_rel_op(&mut self) -> Result<RelOp, CompileError>;

    /// Check whether the `(` at the current position wraps the whole
    /// condition rather than starting an operand.
    fn paren_wraps_condition(&self) -> bool;

    /// Emit the single conditional branch of a header.
    fn emit_cond_branch(
        &mut self,
        op: RelOp,
        invert: bool,
        left: TypeTag,
        right: TypeTag,
        target: &str,
        line: usize,
    );
}

impl<'a> ControlFlowParser for Parser<'a> {
    fn parse_if(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::If, "'if'")?;
        let id = self.parse_if_condition()?;
        self.state.emitter.line(&format!("goto L_else_{}", id));
        self.state.emitter.line(&format!("L_if_{}:", id));
        self.parse_block()?;
        // a trailing else always binds to this innermost open if
        if self.match_token(&Token::Else) {
            self.state.emitter.line(&format!("goto L_end_{}", id));
            self.state.emitter.line(&format!("L_else_{}:", id));
            self.parse_block()?;
            self.state.emitter.line(&format!("L_end_{}:", id));
        } else {
            self.state.emitter.line(&format!("L_else_{}:", id));
            self.state.emitter.line(&format!("L_end_{}:", id));
        }
        Ok(())
    }

    fn parse_while(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::While, "'while'")?;
        let id = self.state.labels.next_id();
        self.state.emitter.line(&format!("L_loop_{}:", id));
        self.parse_while_condition(id)?;
        self.parse_block()?;
        self.state.emitter.line(&format!("goto L_loop_{}", id));
        self.state.emitter.line(&format!("L_end_{}:", id));
        Ok(())
    }

    fn parse_if_condition(&mut self) -> Result<u32, CompileError> {
        if self.paren_wraps_condition() {
            self.advance();
            let id = self.parse_if_condition()?;
            self.expect(&Token::RParen, "')'")?;
            return Ok(id);
        }
        let left = self.parse_additive()?;
        let line = self.current_line();
        let op = self.expect_rel_op()?;
        let right = self.parse_additive()?;
        let id = self.state.labels.next_id();
        let target = format!("L_if_{}", id);
        self.emit_cond_branch(op, false, left, right, &target, line);
        Ok(id)
    }

    fn parse_while_condition(&mut self, id: u32) -> Result<(), CompileError> {
        if self.paren_wraps_condition() {
            self.advance();
            self.parse_while_condition(id)?;
            self.expect(&Token::RParen, "')'")?;
            return Ok(());
        }
        let left = self.parse_additive()?;
        let line = self.current_line();
        let op = self.expect_rel_op()?;
        let right = self.parse_additive()?;
        let target = format!("L_end_{}", id);
        self.emit_cond_branch(op, true, left, right, &target, line);
        Ok(())
    }

    fn expect_rel_op(&mut self) -> Result<RelOp, CompileError> {
        match rel_op_for(self.peek()) {
            Some(op) => {
                self.advance();
                Ok(op)
            }
            None => Err(self.syntax_error("a relational operator")),
        }
    }

    fn paren_wraps_condition(&self) -> bool {
        if !self.check(&Token::LParen) {
            return false;
        }
        // scan ahead for a relational operator outside any nesting; if
        // one exists the parenthesis starts an operand, not the condition
        let mut depth = 0usize;
        for (token, _) in &self.tokens[self.position..] {
            match token {
                Token::LParen | Token::LBracket => depth += 1,
                Token::RParen | Token::RBracket => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                Token::LBrace | Token::RBrace | Token::Semicolon if depth == 0 => break,
                token if depth == 0 && rel_op_for(Some(token)).is_some() => return false,
                _ => {}
            }
        }
        true
    }

    fn emit_cond_branch(
        &mut self,
        op: RelOp,
        invert: bool,
        left: TypeTag,
        right: TypeTag,
        target: &str,
        line: usize,
    ) {
        if left != right {
            self.state.diagnostics.push(
                line,
                ErrorKind::TypeMismatch {
                    op: op.symbol(),
                    left,
                    right,
                },
            );
            return;
        }
        let branch = if invert { op.inverse() } else { op };
        if left == TypeTag::I32 {
            self.state
                .emitter
                .line(&format!("{} {}", branch.int_branch(), target));
        } else if left == TypeTag::F32 {
            self.state.emitter.line("fcmpl");
            self.state
                .emitter
                .line(&format!("{} {}", branch.float_branch(), target));
        }
    }
}
