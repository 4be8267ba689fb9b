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

//! Code generation support for the Minijas translator.
//!
//! This module owns the instruction vocabulary of the JVM assembly
//! dialect: branch mnemonics with their inverse mapping, arithmetic and
//! shift instruction selection, load/store dispatch by type, the label
//! allocator, and the text emitter.
//!
//! The translator proper lives in [`crate::parser`]; it decides *when*
//! to emit, this module knows *what* to emit.

mod emitter;

pub use emitter::Emitter;

use crate::types::TypeTag;

/// Per-method operand stack limit. One size fits every method this
/// surface language can express.
pub const STACK_LIMIT: u32 = 100;

/// Per-method local variable limit.
pub const LOCALS_LIMIT: u32 = 100;

/// `System.out` field access, preceding every print call.
pub const GETSTATIC_OUT: &str = "getstatic java/lang/System/out Ljava/io/PrintStream;";

/// `PrintStream.print(String)` call.
pub const INVOKE_PRINT: &str = "invokevirtual java/io/PrintStream/print(Ljava/lang/String;)V";

/// `PrintStream.println(String)` call.
pub const INVOKE_PRINTLN: &str = "invokevirtual java/io/PrintStream/println(Ljava/lang/String;)V";

/// `String.valueOf(int)` call.
pub const STRING_VALUE_OF_INT: &str = "invokestatic java/lang/String/valueOf(I)Ljava/lang/String;";

/// `String.valueOf(float)` call.
pub const STRING_VALUE_OF_FLOAT: &str =
    "invokestatic java/lang/String/valueOf(F)Ljava/lang/String;";

/// Mints globally unique label ids from a single monotonic counter.
///
/// Every control construct and every value-position boolean expression
/// draws from the same counter, so no two concurrently-open constructs
/// can share an id within one compilation.
#[derive(Debug, Default)]
pub struct LabelAllocator {
    next: u32,
}

impl LabelAllocator {
    /// Create a new allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next label id.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The six relational operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl RelOp {
    /// All six operators, for exhaustive table tests.
    pub const ALL: [RelOp; 6] = [
        RelOp::Gt,
        RelOp::Lt,
        RelOp::Eq,
        RelOp::Ne,
        RelOp::Ge,
        RelOp::Le,
    ];

    /// Surface spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            RelOp::Gt => ">",
            RelOp::Lt => "<",
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Ge => ">=",
            RelOp::Le => "<=",
        }
    }

    /// The logically negated operator, used to branch *out of* a region
    /// instead of *into* it. The mapping is an involution.
    pub fn inverse(&self) -> RelOp {
        match self {
            RelOp::Gt => RelOp::Le,
            RelOp::Le => RelOp::Gt,
            RelOp::Lt => RelOp::Ge,
            RelOp::Ge => RelOp::Lt,
            RelOp::Eq => RelOp::Ne,
            RelOp::Ne => RelOp::Eq,
        }
    }

    /// Two-operand integer compare-and-branch mnemonic.
    pub fn int_branch(&self) -> &'static str {
        match self {
            RelOp::Gt => "if_icmpgt",
            RelOp::Lt => "if_icmplt",
            RelOp::Eq => "if_icmpeq",
            RelOp::Ne => "if_icmpne",
            RelOp::Ge => "if_icmpge",
            RelOp::Le => "if_icmple",
        }
    }

    /// Branch mnemonic applied to the result of `fcmpl`.
    pub fn float_branch(&self) -> &'static str {
        match self {
            RelOp::Gt => "ifgt",
            RelOp::Lt => "iflt",
            RelOp::Eq => "ifeq",
            RelOp::Ne => "ifne",
            RelOp::Ge => "ifge",
            RelOp::Le => "ifle",
        }
    }
}

/// The arithmetic operators shared by binary expressions and compound
/// assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl ArithOp {
    /// Surface spelling of the binary operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }

    /// Surface spelling of the compound-assignment form.
    pub fn compound_symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+=",
            ArithOp::Sub => "-=",
            ArithOp::Mul => "*=",
            ArithOp::Div => "/=",
            ArithOp::Rem => "%=",
        }
    }

    /// The instruction for this operator on the given operand type.
    /// `%` exists only for `i32`.
    pub fn instruction(&self, ty: TypeTag) -> Option<&'static str> {
        match (self, ty) {
            (ArithOp::Add, TypeTag::I32) => Some("iadd"),
            (ArithOp::Sub, TypeTag::I32) => Some("isub"),
            (ArithOp::Mul, TypeTag::I32) => Some("imul"),
            (ArithOp::Div, TypeTag::I32) => Some("idiv"),
            (ArithOp::Rem, TypeTag::I32) => Some("irem"),
            (ArithOp::Add, TypeTag::F32) => Some("fadd"),
            (ArithOp::Sub, TypeTag::F32) => Some("fsub"),
            (ArithOp::Mul, TypeTag::F32) => Some("fmul"),
            (ArithOp::Div, TypeTag::F32) => Some("fdiv"),
            _ => None,
        }
    }
}

/// The two shift operators, restricted to `i32` operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOp {
    /// `<<`
    Shl,
    /// `>>`
    Shr,
}

impl ShiftOp {
    /// Surface spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            ShiftOp::Shl => "<<",
            ShiftOp::Shr => ">>",
        }
    }

    /// The instruction for this shift. `>>` is the unsigned variant.
    pub fn instruction(&self) -> &'static str {
        match self {
            ShiftOp::Shl => "ishl",
            ShiftOp::Shr => "iushr",
        }
    }
}

/// Store instruction for a variable of the given type, if one exists.
/// There is none for `bool` (a known incompleteness of this dialect).
pub fn store_for(ty: TypeTag) -> Option<&'static str> {
    match ty {
        TypeTag::I32 => Some("istore"),
        TypeTag::F32 => Some("fstore"),
        TypeTag::Str => Some("astore"),
        _ => None,
    }
}

/// Load instruction for a variable of the given type, if one exists.
pub fn load_for(ty: TypeTag) -> Option<&'static str> {
    match ty {
        TypeTag::I32 => Some("iload"),
        TypeTag::F32 => Some("fload"),
        TypeTag::Str => Some("aload"),
        _ => None,
    }
}

/// Negate instruction for the given numeric type.
pub fn neg_for(ty: TypeTag) -> Option<&'static str> {
    match ty {
        TypeTag::I32 => Some("ineg"),
        TypeTag::F32 => Some("fneg"),
        _ => None,
    }
}
