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

//! The assembly text emitter.
//!
//! Appends one instruction or directive per line to an in-memory buffer.
//! The emitter is stateless beyond its indentation counter: method
//! bodies are indented by one tab, directives outside them are not. The
//! buffer is only written to disk by the caller, and only for error-free
//! compilations.

/// Indentation-aware line emitter for the output assembly.
#[derive(Debug, Default)]
pub struct Emitter {
    buffer: String,
    indent: usize,
}

impl Emitter {
    /// Create a new empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.buffer.push('\t');
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append an empty line, ignoring indentation.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Drop back to column zero (syntax-error recovery).
    pub fn reset_indent(&mut self) {
        self.indent = 0;
    }

    /// Get the emitted text so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Convert into the emitted text.
    pub fn into_string(self) -> String {
        self.buffer
    }
}
