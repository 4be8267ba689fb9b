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

//! Integration tests for the Minijas CLI.
//!
//! These drive the compiled binary end to end: the trace and line count
//! on stdout, diagnostics on stderr, the artifact written only for
//! error-free compilations, and the exit-code ladder.

use std::process::Command;

fn minijas() -> Command {
    Command::new(env!("CARGO_BIN_EXE_minijas"))
}

#[test]
fn test_compile_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("hello.mj");
    std::fs::write(&source_path, "func main() {\n    println \"hello\";\n}\n").unwrap();
    let output_path = dir.path().join("hello.j");

    let result = minijas()
        .arg(&source_path)
        .arg("-o")
        .arg(&output_path)
        .output()
        .unwrap();

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("> Create symbol table (scope level 0)"));
    assert!(stdout.contains("Total lines: 3"));

    let assembly = std::fs::read_to_string(&output_path).unwrap();
    assert!(assembly.starts_with(".source hello.j\n"));
    assert!(assembly.contains("ldc \"hello\""));
    assert!(assembly.ends_with(".end method\n"));
}

#[test]
fn test_default_output_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("program.mj");
    std::fs::write(&source_path, "func main() { }\n").unwrap();

    let result = minijas().arg(&source_path).output().unwrap();

    assert!(result.status.success());
    assert!(dir.path().join("program.j").exists());
}

#[test]
fn test_failed_compilation_discards_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("bad.mj");
    std::fs::write(&source_path, "func main() {\n    x = 1;\n}\n").unwrap();
    let output_path = dir.path().join("bad.j");

    let result = minijas()
        .arg(&source_path)
        .arg("-o")
        .arg(&output_path)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(!output_path.exists(), "artifact must not be written");

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("error:2: undefined: x"));
    // the line count is still reported
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Total lines: 3"));
}

#[test]
fn test_terminal_syntax_error() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("eof.mj");
    std::fs::write(&source_path, "func main() {\n").unwrap();

    let result = minijas().arg(&source_path).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("unexpected end of file"));
    assert!(!dir.path().join("eof.j").exists());
}

#[test]
fn test_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = minijas()
        .arg(dir.path().join("missing.mj"))
        .output()
        .unwrap();
    assert_eq!(result.status.code(), Some(3));
}
