extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use neoanalog_lib::config::SEMANTIC_PREFIX;
use neoanalog_lib::headless::{extract, HeadlessMap};

fn bench_large_stylesheet(c: &mut Criterion) {
    let mut big_css = String::with_capacity(10_000_000);
    big_css.push_str("@tailwind base;\n");
    for i in 0..50_000 {
        big_css.push_str(&format!(
            ".na-block-{i} {{ font-size: 14px; background-color: #111; border-top-left-radius: 4px; }}\n"
        ));
        big_css.push_str(&format!(".util-{i} {{ padding: 4px; }}\n"));
    }

    c.bench_function("large_stylesheet", |b| {
        b.iter(|| extract(&big_css, SEMANTIC_PREFIX))
    });
}

fn bench_serialize_map(c: &mut Criterion) {
    let mut css = String::new();
    for i in 0..5_000 {
        css.push_str(&format!(".na-c{i} {{ color: red; margin-inline-start: 2px; }}\n"));
    }
    let classes = extract(&css, SEMANTIC_PREFIX).classes;
    let map = HeadlessMap::new(classes);

    c.bench_function("serialize_map", |b| b.iter(|| map.to_json()));
}

criterion_group!(benches, bench_large_stylesheet, bench_serialize_map);
criterion_main!(benches);
