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

//! Symbol definitions for the scope manager.
//!
//! A symbol is a named, typed, addressed program entity. Variables carry
//! an address from the whole-compilation-unit counter; functions carry
//! the sentinel address `-1` and are permanently immutable.

use crate::types::TypeTag;

/// Symbol table entry.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// The symbol name.
    pub name: String,
    /// Variable or function.
    pub kind: SymbolKind,
    /// Stack-frame slot for variables, `-1` for functions.
    pub address: i32,
    /// 1-based source line of the declaration.
    pub line: usize,
    /// Whether the binding was declared `mut`. Always false for functions.
    pub mutable: bool,
    /// Method signature for functions, `-` for variables.
    pub signature: String,
}

/// The kind of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A variable with its declared type.
    Variable(TypeTag),
    /// A function. The surface grammar has no parameters or return
    /// types, so no signature data beyond `(V)V` is tracked.
    Function,
}

impl Symbol {
    /// Create a new variable symbol.
    pub fn variable(name: String, ty: TypeTag, mutable: bool, address: i32, line: usize) -> Self {
        Self {
            name,
            kind: SymbolKind::Variable(ty),
            address,
            line,
            mutable,
            signature: "-".to_string(),
        }
    }

    /// Create a new function symbol.
    pub fn function(name: String, line: usize) -> Self {
        Self {
            name,
            kind: SymbolKind::Function,
            address: -1,
            line,
            // Functions are never assignable, whatever the surface says
            mutable: false,
            signature: "(V)V".to_string(),
        }
    }

    /// Get the declared type of a variable symbol.
    pub fn type_tag(&self) -> Option<TypeTag> {
        match self.kind {
            SymbolKind::Variable(ty) => Some(ty),
            SymbolKind::Function => None,
        }
    }

    /// The type name shown in scope dumps (`func` for functions).
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            SymbolKind::Variable(ty) => ty.name(),
            SymbolKind::Function => "func",
        }
    }

    /// The mutability column of the scope dump: `-1` for functions,
    /// `0`/`1` for immutable/mutable variables.
    pub fn mut_flag(&self) -> i32 {
        match self.kind {
            SymbolKind::Function => -1,
            SymbolKind::Variable(_) => i32::from(self.mutable),
        }
    }
}
