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

//! Performance benchmarks for the Minijas compiler.
//!
//! Run with: cargo bench
//!
//! Results are saved to target/criterion/ with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Build a synthetic program with the given number of functions, each
/// containing declarations, a loop and a branch.
fn generate_program(functions: usize) -> String {
    let mut source = String::new();
    for f in 0..functions {
        let name = if f == 0 {
            "main".to_string()
        } else {
            format!("step{}", f)
        };
        source.push_str(&format!("func {}() {{\n", name));
        source.push_str("    let mut total: i32 = 0;\n");
        source.push_str("    let mut i: i32 = 0;\n");
        source.push_str("    while i < 100 {\n");
        source.push_str("        i += 1;\n");
        source.push_str("        total += i * 2;\n");
        source.push_str("        if total > 500 {\n");
        source.push_str("            total -= 500;\n");
        source.push_str("        } else {\n");
        source.push_str("            print total;\n");
        source.push_str("        }\n");
        source.push_str("    }\n");
        source.push_str("    println total;\n");
        source.push_str("}\n\n");
    }
    source
}

fn bench_lexer(c: &mut Criterion) {
    let small = generate_program(1);
    let medium = generate_program(20);
    let large = generate_program(200);

    let mut group = c.benchmark_group("lexer");
    for (name, source) in [("small", &small), ("medium", &medium), ("large", &large)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("tokenize", name), source, |b, src| {
            b.iter(|| minijas::lexer::tokenize(black_box(src)))
        });
    }
    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let small = generate_program(1);
    let medium = generate_program(20);
    let large = generate_program(200);

    let mut group = c.benchmark_group("compile");
    for (name, source) in [("small", &small), ("medium", &medium), ("large", &large)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("full_pass", name), source, |b, src| {
            b.iter(|| minijas::compile(black_box(src)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lexer, bench_compile);
criterion_main!(benches);
