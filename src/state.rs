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

//! Shared mutable state of one compilation.
//!
//! Everything the semantic actions touch lives here: the scope stack,
//! the label counter, the output emitter and the diagnostics sink. One
//! fresh value is built per compilation and threaded through the
//! translator by ownership, so there is no hidden cross-call coupling
//! and tests can construct their own.

use crate::codegen::{Emitter, LabelAllocator};
use crate::error::Diagnostics;
use crate::symtab::SymbolTable;

/// The mutable state of one compilation run.
#[derive(Debug, Default)]
pub struct CompilerState {
    /// The scope manager, including the global address counter.
    pub symbols: SymbolTable,
    /// The global label counter.
    pub labels: LabelAllocator,
    /// The output assembly buffer.
    pub emitter: Emitter,
    /// Recoverable diagnostics in detection order.
    pub diagnostics: Diagnostics,
}

impl CompilerState {
    /// Create a fresh state for one compilation.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let mut state = CompilerState::new();
        assert_eq!(state.symbols.depth(), 0);
        assert_eq!(state.labels.next_id(), 0);
        assert!(state.emitter.as_str().is_empty());
        assert!(!state.diagnostics.has_errors());
    }
}
