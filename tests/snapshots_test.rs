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

//! Snapshot tests for the Minijas compiler.
//!
//! These pin whole artifacts byte-for-byte with the `insta` crate, so an
//! accidental change to emission order, indentation or label numbering
//! shows up as a reviewable diff.

#[test]
fn test_codegen_snapshot_hello() {
    let source = include_str!("fixtures/hello.mj");
    let output = minijas::compile(source).unwrap();
    assert!(output.diagnostics.is_empty());
    insta::assert_snapshot!("codegen_hello", output.assembly);
}

#[test]
fn test_codegen_snapshot_loop_and_branch() {
    let source = include_str!("fixtures/loop_and_branch.mj");
    let output = minijas::compile(source).unwrap();
    assert!(output.diagnostics.is_empty());
    insta::assert_snapshot!("codegen_loop_and_branch", output.assembly);
}
