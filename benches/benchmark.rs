use criterion::{Criterion, criterion_group, criterion_main};
use stackwick::newick::NewickParser;
use stackwick::{parse, serialize};
use std::hint::black_box;

/// Caterpillar tree `(t0,(t1,(t2,...)))` with `n` leaves
fn caterpillar(n: usize) -> String {
    let mut newick = String::new();
    for i in 0..n - 1 {
        newick.push_str(&format!("(t{i}, "));
    }
    newick.push_str(&format!("t{}", n - 1));
    newick.push_str(&")".repeat(n - 1));
    newick
}

/// Balanced binary tree of the given height
fn balanced(height: usize) -> String {
    let mut level: Vec<String> = (0..1 << height).map(|i| format!("taxon_{i}")).collect();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| format!("({}, {})", pair[0], pair[1]))
            .collect();
    }
    level.remove(0)
}

/// Single node with `n` leaf children
fn star(n: usize) -> String {
    let names: Vec<String> = (0..n).map(|i| format!("t{i}")).collect();
    format!("({})", names.join(", "))
}

fn newick_parsing(c: &mut Criterion) {
    let inputs = [
        ("caterpillar_1k", caterpillar(1_000)),
        ("balanced_2^12", balanced(12)),
        ("star_10k", star(10_000)),
    ];

    for (name, newick) in &inputs {
        c.bench_function(&format!("parse_{name}"), |b| {
            b.iter(|| parse(black_box(newick)).unwrap());
        });
    }

    let parser = NewickParser::new().with_stack_capacity(2 * 4096);
    let newick = balanced(12);
    c.bench_function("parse_balanced_2^12_preallocated", |b| {
        b.iter(|| parser.parse_str(black_box(&newick)).unwrap());
    });
}

fn newick_writing(c: &mut Criterion) {
    let tree = parse(balanced(12)).unwrap();
    c.bench_function("serialize_balanced_2^12", |b| {
        b.iter(|| serialize(black_box(&tree)));
    });
}

fn deep_nesting(c: &mut Criterion) {
    let newick = caterpillar(100_000);
    c.bench_function("parse_caterpillar_100k", |b| {
        b.iter(|| parse(black_box(&newick)).unwrap());
    });
}

criterion_group!(regression, newick_parsing, newick_writing);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = deep_nesting
}
criterion_main!(regression, reporting);
