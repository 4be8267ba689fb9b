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

//! Minijas Compiler CLI
//!
//! Compiles one Minijas source file into a Jasmin-compatible `.j`
//! assembly file. The scope trace goes to stdout, diagnostics go to
//! stderr, and the artifact is only written when the compilation
//! reported no errors.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Minijas - a compiler for a Rust-flavored mini-language
#[derive(Parser, Debug)]
#[command(name = "minijas")]
#[command(version)]
#[command(about = "Compile a Rust-flavored mini-language to JVM assembly")]
#[command(long_about = r#"
Minijas compiles source files written in a small statically-typed,
Rust-flavored language into textual JVM assembly for the Jasmin
assembler.

The compiler makes a single pass over the source: code is emitted while
parsing. Diagnostics are printed as `error:<line>: <message>`; if any
are reported the output file is not written.

Example usage:
  minijas hello.mj
  minijas hello.mj -o hello.j
  minijas hello.mj --verbose
"#)]
struct Cli {
    /// Source file to compile (.mj)
    source_file: PathBuf,

    /// Output file (.j). Defaults to the source name with a .j extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.source_file.with_extension("j"));
    let output_name = output_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("Main.j")
        .to_string();

    if cli.verbose {
        println!("{} Compiler v{}", minijas::NAME, minijas::VERSION);
        println!("Source: {}", cli.source_file.display());
        println!("Output: {}", output_path.display());
        println!();
    }

    let source = match std::fs::read_to_string(&cli.source_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source_file.display(), e);
            return ExitCode::from(3);
        }
    };

    let output = match minijas::compile_with_source_name(&source, &output_name) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{}", e);
            println!("Total lines: {}", source.lines().count());
            return ExitCode::from(1);
        }
    };

    // the scope trace is part of the observable output
    print!("{}", output.trace);

    for diagnostic in &output.diagnostics {
        eprintln!("{}", diagnostic);
    }

    println!("Total lines: {}", output.total_lines);

    if output.has_errors() {
        // never retain an artifact from a failed compilation
        if cli.verbose {
            println!("Compilation failed, no output written.");
        }
        return ExitCode::from(1);
    }

    if let Err(e) = std::fs::write(&output_path, &output.assembly) {
        eprintln!("Error: Cannot write {}: {}", output_path.display(), e);
        return ExitCode::from(1);
    }

    if cli.verbose {
        println!(
            "Generated {} bytes of assembly",
            output.assembly.len()
        );
        println!("Done!");
    } else {
        println!(
            "Compiled {} -> {}",
            cli.source_file.display(),
            output_path.display()
        );
    }

    ExitCode::SUCCESS
}
