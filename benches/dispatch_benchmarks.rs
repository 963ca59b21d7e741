//! Performance benchmarks for command dispatch.
//!
//! Measures keyword lookup, a failing `add` on a populated book, and
//! rendering `all` for books of different sizes.

use assistant_bot::{CommandTable, PhoneBook};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build a book with `size` contacts named `contact<N>`.
fn populated_book(size: usize) -> PhoneBook {
    let mut book = PhoneBook::new();
    for i in 0..size {
        book.set(&format!("contact{i}"), &format!("{:010}", i));
    }
    book
}

fn bench_lookup(c: &mut Criterion) {
    let table = CommandTable::new();

    c.bench_function("lookup_registered", |b| {
        b.iter(|| table.lookup(black_box("phone")))
    });
    c.bench_function("lookup_fallback", |b| {
        b.iter(|| table.lookup(black_box("unknown")))
    });
}

fn bench_add_existing(c: &mut Criterion) {
    let table = CommandTable::new();
    let mut book = populated_book(1_000);
    let args = vec!["contact500".to_string(), "1234567890".to_string()];

    c.bench_function("dispatch_add_existing", |b| {
        b.iter(|| table.dispatch(&mut book, black_box("add"), black_box(&args)))
    });
}

fn bench_show_all(c: &mut Criterion) {
    let table = CommandTable::new();
    let mut group = c.benchmark_group("dispatch_all");

    for size in [10, 100, 1_000] {
        let mut book = populated_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| table.dispatch(&mut book, "all", &[]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_add_existing, bench_show_all);
criterion_main!(benches);
