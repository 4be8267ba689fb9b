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

//! Scope management for the Minijas translator.
//!
//! The symbol table is a growable stack of lexical scopes. A scope is
//! pushed on block entry and popped, after its diagnostic dump, on block
//! exit; names in an exited scope become unresolvable. Lookup walks the
//! stack from innermost to outermost and the first match wins, so
//! shadowing is exactly "closest scope wins".
//!
//! Variable addresses come from one whole-compilation-unit counter and
//! are never reused, even across scope exit. Function symbols carry the
//! sentinel address `-1` and do not consume the counter.

mod scope;
mod symbol;

pub use scope::Scope;
pub use symbol::{Symbol, SymbolKind};

use crate::types::TypeTag;
use std::fmt::Write;

/// The scope manager.
#[derive(Debug, Default)]
pub struct SymbolTable {
    /// The scope stack (innermost scope last). Empty between functions.
    scopes: Vec<Scope>,
    /// Whole-compilation-unit address counter.
    next_address: i32,
    /// Accumulated scope-lifecycle trace (create/insert/dump lines).
    trace: String,
}

impl SymbolTable {
    /// Create a new symbol table with no open scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new empty scope onto the stack.
    pub fn enter_scope(&mut self) {
        let level = self.scopes.len();
        self.scopes.push(Scope::new(level));
        let _ = writeln!(self.trace, "> Create symbol table (scope level {})", level);
    }

    /// Declare a variable in the current scope and return its address.
    ///
    /// No duplicate-name check is performed; a duplicate declaration in
    /// the same scope shadows the earlier one at lookup time.
    pub fn declare_variable(
        &mut self,
        name: &str,
        ty: TypeTag,
        mutable: bool,
        line: usize,
    ) -> i32 {
        let address = self.next_address;
        self.next_address += 1;
        self.insert(Symbol::variable(name.to_string(), ty, mutable, address, line));
        address
    }

    /// Declare a function in the current scope.
    ///
    /// Function symbols are permanently immutable and carry address `-1`.
    pub fn declare_function(&mut self, name: &str, line: usize) {
        self.insert(Symbol::function(name.to_string(), line));
    }

    fn insert(&mut self, symbol: Symbol) {
        let level = self.scopes.len().saturating_sub(1);
        let _ = writeln!(
            self.trace,
            "> Insert `{}` (addr: {}) to scope level {}",
            symbol.name, symbol.address, level
        );
        self.scopes
            .last_mut()
            .expect("no scope available")
            .define(symbol);
    }

    /// Look up a symbol, searching from innermost to outermost scope.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.lookup(name))
    }

    /// Get the mutability of a name; false when it is not declared.
    pub fn is_mutable(&self, name: &str) -> bool {
        self.resolve(name).map_or(false, |symbol| symbol.mutable)
    }

    /// Dump the current scope's symbols to the trace, then pop it.
    ///
    /// Popping is not reversible; once exited, names in that scope become
    /// unresolvable.
    pub fn exit_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        let _ = writeln!(
            self.trace,
            "\n> Dump symbol table (scope level: {})",
            scope.level()
        );
        let _ = writeln!(
            self.trace,
            "{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}",
            "Index", "Name", "Mut", "Type", "Addr", "Lineno", "Func_sig"
        );
        for (index, symbol) in scope.symbols().enumerate() {
            let _ = writeln!(
                self.trace,
                "{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}{:<10}",
                index,
                symbol.name,
                symbol.mut_flag(),
                symbol.type_name(),
                symbol.address,
                symbol.line,
                symbol.signature
            );
        }
    }

    /// Pop and dump every remaining scope (syntax-error recovery).
    pub fn unwind(&mut self) {
        while !self.scopes.is_empty() {
            self.exit_scope();
        }
    }

    /// Get the current scope depth.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Get the trace accumulated so far.
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Convert into the accumulated trace.
    pub fn into_trace(self) -> String {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadowing_closest_scope_wins() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        let outer = table.declare_variable("x", TypeTag::I32, false, 1);
        table.enter_scope();
        let inner = table.declare_variable("x", TypeTag::F32, true, 2);

        assert_ne!(outer, inner);
        assert_eq!(table.resolve("x").unwrap().address, inner);
        assert_eq!(table.resolve("x").unwrap().type_tag(), Some(TypeTag::F32));

        table.exit_scope();
        assert_eq!(table.resolve("x").unwrap().address, outer);
    }

    #[test]
    fn test_exited_scope_is_unresolvable() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.enter_scope();
        table.declare_variable("y", TypeTag::I32, false, 1);
        table.exit_scope();
        assert!(table.resolve("y").is_none());
    }

    #[test]
    fn test_addresses_are_unique_across_scopes() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        let mut addresses = Vec::new();
        addresses.push(table.declare_variable("a", TypeTag::I32, false, 1));
        table.enter_scope();
        addresses.push(table.declare_variable("a", TypeTag::I32, false, 2));
        addresses.push(table.declare_variable("b", TypeTag::I32, false, 3));
        table.exit_scope();
        // addresses are never reused, even after a scope exits
        addresses.push(table.declare_variable("c", TypeTag::I32, false, 4));

        let mut sorted = addresses.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), addresses.len());
        assert_eq!(addresses, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_function_symbols_do_not_consume_addresses() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.declare_function("main", 1);
        assert_eq!(table.resolve("main").unwrap().address, -1);
        assert_eq!(table.declare_variable("x", TypeTag::I32, false, 2), 0);
    }

    #[test]
    fn test_is_mutable() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.declare_variable("a", TypeTag::I32, false, 1);
        table.declare_variable("b", TypeTag::I32, true, 1);
        table.declare_function("f", 1);
        assert!(!table.is_mutable("a"));
        assert!(table.is_mutable("b"));
        assert!(!table.is_mutable("f"));
        assert!(!table.is_mutable("missing"));
    }

    #[test]
    fn test_trace_format() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.declare_variable("x", TypeTag::I32, true, 3);
        table.exit_scope();

        let trace = table.into_trace();
        assert!(trace.contains("> Create symbol table (scope level 0)"));
        assert!(trace.contains("> Insert `x` (addr: 0) to scope level 0"));
        assert!(trace.contains("\n> Dump symbol table (scope level: 0)"));
        assert!(trace.contains("Index     Name      Mut       Type      Addr      Lineno    Func_sig"));
        assert!(trace.contains("0         x         1         i32       0         3         -"));
    }

    #[test]
    fn test_unwind_pops_everything() {
        let mut table = SymbolTable::new();
        table.enter_scope();
        table.enter_scope();
        table.enter_scope();
        table.unwind();
        assert_eq!(table.depth(), 0);
    }
}
