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

//! Static type tags for the Minijas language.
//!
//! Every expression synthesizes exactly one of these tags during
//! translation. Array element types and lengths are accepted by the
//! grammar but not retained, so `array` is a bare tag like the others.

use std::fmt;

/// The static type of an expression or variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// 32-bit signed integer.
    I32,
    /// 32-bit IEEE-754 float.
    F32,
    /// String reference.
    Str,
    /// Boolean, represented as the integers 0 and 1 on the operand stack.
    Bool,
    /// Array of unspecified element type and length.
    Array,
    /// No value (statements).
    Void,
    /// Synthesized for unresolvable names; suppresses follow-up codegen.
    Undefined,
}

impl TypeTag {
    /// Check whether arithmetic instructions exist for this type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeTag::I32 | TypeTag::F32)
    }

    /// Get the surface-syntax name of this type.
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::I32 => "i32",
            TypeTag::F32 => "f32",
            TypeTag::Str => "str",
            TypeTag::Bool => "bool",
            TypeTag::Array => "array",
            TypeTag::Void => "void",
            TypeTag::Undefined => "undefined",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(TypeTag::I32.to_string(), "i32");
        assert_eq!(TypeTag::F32.to_string(), "f32");
        assert_eq!(TypeTag::Str.to_string(), "str");
        assert_eq!(TypeTag::Bool.to_string(), "bool");
        assert_eq!(TypeTag::Array.to_string(), "array");
        assert_eq!(TypeTag::Undefined.to_string(), "undefined");
    }

    #[test]
    fn test_is_numeric() {
        assert!(TypeTag::I32.is_numeric());
        assert!(TypeTag::F32.is_numeric());
        assert!(!TypeTag::Str.is_numeric());
        assert!(!TypeTag::Bool.is_numeric());
        assert!(!TypeTag::Undefined.is_numeric());
    }
}
