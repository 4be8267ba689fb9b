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

//! Statement and declaration translation.
//!
//! Functions emit their method prologue immediately after the header is
//! consumed, before the body is parsed; the prologue/epilogue bracket
//! the only indentation change in the output. Blocks push a scope on `{`
//! and dump-and-pop it on `}`.

use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::types::TypeParser;
use super::Parser;
use crate::codegen::{
    load_for, store_for, ArithOp, GETSTATIC_OUT, INVOKE_PRINT, INVOKE_PRINTLN, LOCALS_LIMIT,
    STACK_LIMIT, STRING_VALUE_OF_FLOAT, STRING_VALUE_OF_INT,
};
use crate::error::{CompileError, ErrorKind};
use crate::lexer::Token;
use crate::symtab::SymbolKind;
use crate::types::TypeTag;

/// Extension trait for statement translation.
pub(crate) trait StatementParser {
    /// Parse a function declaration.
    fn parse_function(&mut self) -> Result<(), CompileError>;

    /// Parse a braced block with its own scope.
    fn parse_block(&mut self) -> Result<(), CompileError>;

    /// Parse a single statement.
    fn parse_statement(&mut self) -> Result<(), CompileError>;

    /// Parse a `let` / `let mut` declaration.
    fn parse_let(&mut self) -> Result<(), CompileError>;

    /// Parse an assignment or compound assignment.
    fn parse_assignment(&mut self) -> Result<(), CompileError>;

    /// Parse a `print` / `println` statement.
    fn parse_print(&mut self, newline: bool) -> Result<(), CompileError>;

    /// Parse a bare expression statement.
    fn parse_expression_statement(&mut self) -> Result<(), CompileError>;

    /// Emit the load/op/store sequence of a compound assignment.
    fn emit_compound(&mut self, op: ArithOp, ty: TypeTag, address: i32, line: usize);

    /// Emit the type-dispatched conversion-then-output sequence.
    fn emit_print(&mut self, ty: TypeTag, newline: bool);
}

impl<'a> StatementParser for Parser<'a> {
    fn parse_function(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::Func, "'func'")?;
        let (name, line) = self.expect_identifier()?;
        self.expect(&Token::LParen, "'('")?;
        self.expect(&Token::RParen, "')'")?;

        // the function owns a scope of its own and registers itself in
        // it, so the name resolves inside the body
        self.state.symbols.enter_scope();
        self.state.symbols.declare_function(&name, line);

        self.state.emitter.blank();
        if name == "main" {
            self.state
                .emitter
                .line(".method public static main([Ljava/lang/String;)V");
        } else {
            self.state
                .emitter
                .line(&format!(".method public static {}()V", name));
        }
        self.state
            .emitter
            .line(&format!(".limit stack {}", STACK_LIMIT));
        self.state
            .emitter
            .line(&format!(".limit locals {}", LOCALS_LIMIT));
        self.state.emitter.indent();

        self.parse_block()?;

        self.state.emitter.dedent();
        self.state.emitter.line("return");
        self.state.emitter.line(".end method");
        self.state.symbols.exit_scope();
        Ok(())
    }

    fn parse_block(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::LBrace, "'{'")?;
        self.state.symbols.enter_scope();

        while !self.check(&Token::RBrace) {
            if self.is_at_end() {
                return Err(CompileError::UnexpectedEof {
                    line: self.current_line(),
                });
            }
            match self.parse_statement() {
                Ok(()) => {}
                Err(CompileError::Syntax { line, message }) => {
                    self.state
                        .diagnostics
                        .push(line, ErrorKind::Syntax { message });
                    self.recover_statement();
                }
                Err(fatal) => return Err(fatal),
            }
        }

        self.expect(&Token::RBrace, "'}'")?;
        self.state.symbols.exit_scope();
        Ok(())
    }

    fn parse_statement(&mut self) -> Result<(), CompileError> {
        match self.peek() {
            Some(Token::Let) => self.parse_let(),
            Some(Token::If) => self.parse_if(),
            Some(Token::While) => self.parse_while(),
            Some(Token::Print) => self.parse_print(false),
            Some(Token::Println) => self.parse_print(true),
            Some(Token::LBrace) => self.parse_block(),
            Some(Token::Ident(_))
                if self.peek_ahead(1).is_some_and(Token::is_assignment) =>
            {
                self.parse_assignment()
            }
            Some(_) => self.parse_expression_statement(),
            None => Err(self.syntax_error("a statement")),
        }
    }

    fn parse_let(&mut self) -> Result<(), CompileError> {
        self.expect(&Token::Let, "'let'")?;
        let mutable = self.match_token(&Token::Mut);
        let (name, line) = self.expect_identifier()?;

        let annotation = if self.match_token(&Token::Colon) {
            Some(self.parse_type()?)
        } else {
            None
        };
        let initialized = if self.match_token(&Token::Assign) {
            // the initializer evaluates before the name is declared, so
            // `let x = x;` resolves the outer binding
            Some(self.parse_expression()?)
        } else {
            None
        };
        if annotation.is_none() && initialized.is_none() {
            return Err(self.syntax_error("':' or '='"));
        }
        self.expect(&Token::Semicolon, "';'")?;

        // an explicit annotation wins over the initializer's type
        let ty = annotation
            .or(initialized)
            .expect("declaration form checked");
        let address = self.state.symbols.declare_variable(&name, ty, mutable, line);
        if initialized.is_some() {
            if let Some(instruction) = store_for(ty) {
                self.state
                    .emitter
                    .line(&format!("{} {}", instruction, address));
            }
        }
        Ok(())
    }

    fn parse_assignment(&mut self) -> Result<(), CompileError> {
        let (name, line) = self.expect_identifier()?;
        let (op_token, _) = self.advance().expect("assignment operator checked");
        self.parse_expression()?;
        self.expect(&Token::Semicolon, "';'")?;

        let resolved = self
            .state
            .symbols
            .resolve(&name)
            .map(|symbol| (symbol.kind, symbol.address, symbol.mutable));
        let Some((kind, address, mutable)) = resolved else {
            self.state
                .diagnostics
                .push(line, ErrorKind::UndefinedSymbol { name });
            return Ok(());
        };
        if !mutable {
            // the right-hand value stays on the evaluation stack with no
            // consuming store
            self.state
                .diagnostics
                .push(line, ErrorKind::ImmutableAssignment { name });
            return Ok(());
        }
        let SymbolKind::Variable(ty) = kind else {
            return Ok(());
        };

        match op_token {
            Token::Assign => {
                if let Some(instruction) = store_for(ty) {
                    self.state
                        .emitter
                        .line(&format!("{} {}", instruction, address));
                }
            }
            Token::PlusAssign => self.emit_compound(ArithOp::Add, ty, address, line),
            Token::MinusAssign => self.emit_compound(ArithOp::Sub, ty, address, line),
            Token::StarAssign => self.emit_compound(ArithOp::Mul, ty, address, line),
            Token::SlashAssign => self.emit_compound(ArithOp::Div, ty, address, line),
            Token::PercentAssign => self.emit_compound(ArithOp::Rem, ty, address, line),
            _ => unreachable!("assignment operator checked"),
        }
        Ok(())
    }

    fn parse_print(&mut self, newline: bool) -> Result<(), CompileError> {
        self.advance();
        let ty = self.parse_expression()?;
        self.expect(&Token::Semicolon, "';'")?;
        self.emit_print(ty, newline);
        Ok(())
    }

    fn parse_expression_statement(&mut self) -> Result<(), CompileError> {
        let ty = self.parse_expression()?;
        self.expect(&Token::Semicolon, "';'")?;
        // booleans are never discarded
        if ty != TypeTag::Bool {
            self.state.emitter.line("pop");
        }
        Ok(())
    }

    fn emit_compound(&mut self, op: ArithOp, ty: TypeTag, address: i32, line: usize) {
        let (Some(load), Some(store), Some(instruction)) =
            (load_for(ty), store_for(ty), op.instruction(ty))
        else {
            self.state.diagnostics.push(
                line,
                ErrorKind::UnsupportedOperandType {
                    op: op.compound_symbol(),
                    operand: ty,
                },
            );
            return;
        };
        // right-hand value is on the stack; load the target, swap so the
        // operands sit in source order, combine, store back
        self.state.emitter.line(&format!("{} {}", load, address));
        self.state.emitter.line("swap");
        self.state.emitter.line(instruction);
        self.state.emitter.line(&format!("{} {}", store, address));
    }

    fn emit_print(&mut self, ty: TypeTag, newline: bool) {
        let invoke = if newline { INVOKE_PRINTLN } else { INVOKE_PRINT };
        match ty {
            TypeTag::I32 => self.state.emitter.line(STRING_VALUE_OF_INT),
            TypeTag::F32 => self.state.emitter.line(STRING_VALUE_OF_FLOAT),
            TypeTag::Bool => {
                // pick a literal "true"/"false" string off the 0/1 value
                let id = self.state.labels.next_id();
                self.state.emitter.line(&format!("ifeq L_false_{}", id));
                self.state.emitter.line("ldc \"true\"");
                self.state.emitter.line(&format!("goto L_end_{}", id));
                self.state.emitter.line(&format!("L_false_{}:", id));
                self.state.emitter.line("ldc \"false\"");
                self.state.emitter.line(&format!("L_end_{}:", id));
            }
            TypeTag::Str => {}
            // nothing sensible to print for the remaining types
            _ => return,
        }
        self.state.emitter.line(GETSTATIC_OUT);
        self.state.emitter.line("swap");
        self.state.emitter.line(invoke);
    }
}
