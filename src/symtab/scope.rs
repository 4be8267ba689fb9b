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

//! A single lexical scope.
//!
//! Symbols are kept in insertion order because the scope dump is part of
//! the observable output. Lookup scans in reverse, so within one scope a
//! duplicate declaration shadows the earlier one.

use super::symbol::Symbol;

/// A scope in the symbol table.
#[derive(Debug)]
pub struct Scope {
    /// Symbols defined in this scope, in declaration order.
    symbols: Vec<Symbol>,
    /// Nesting level, 0 for the outermost scope.
    level: usize,
}

impl Scope {
    /// Create a new empty scope at the given nesting level.
    pub fn new(level: usize) -> Self {
        Self {
            symbols: Vec::new(),
            level,
        }
    }

    /// Get the nesting level of this scope.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Define a symbol in this scope. Duplicate names are not rejected;
    /// the most recent declaration wins at lookup time.
    pub fn define(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Look up a symbol in this scope, most recent declaration first.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().rev().find(|s| s.name == name)
    }

    /// Iterate the symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTag;

    #[test]
    fn test_define_and_lookup() {
        let mut scope = Scope::new(0);
        scope.define(Symbol::variable("x".to_string(), TypeTag::I32, false, 0, 1));
        assert!(scope.lookup("x").is_some());
        assert!(scope.lookup("y").is_none());
    }

    #[test]
    fn test_duplicate_declaration_last_wins() {
        let mut scope = Scope::new(0);
        scope.define(Symbol::variable("x".to_string(), TypeTag::I32, false, 0, 1));
        scope.define(Symbol::variable("x".to_string(), TypeTag::F32, true, 1, 2));
        let found = scope.lookup("x").unwrap();
        assert_eq!(found.address, 1);
        assert_eq!(found.type_tag(), Some(TypeTag::F32));
        // both declarations stay visible in dump order
        assert_eq!(scope.symbols().count(), 2);
    }
}
