use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uri_template::{vals, vars, Template};

fn one_placeholder(c: &mut Criterion) {
    const TEMPLATE: &str = "http://example.com/{foo}";
    let mut hashmap = HashMap::new();
    hashmap.insert("foo", "it worked");

    let slice = &[("foo", "it worked")];

    c.bench_function("one placeholder, fn", |b| {
        b.iter(|| {
            let template = Template::parse(black_box(TEMPLATE)).unwrap();
            black_box(template.expand(&vals(|_: &str| Some("it worked"))).unwrap());
        })
    });
    c.bench_function("one placeholder, hashmap", |b| {
        b.iter(|| {
            let template = Template::parse(black_box(TEMPLATE)).unwrap();
            black_box(template.expand(&hashmap).unwrap());
        })
    });
    c.bench_function("one placeholder, slice", |b| {
        b.iter(|| {
            let template = Template::parse(black_box(TEMPLATE)).unwrap();
            black_box(template.expand(slice).unwrap());
        })
    });
}

fn many_placeholders(c: &mut Criterion) {
    const TEMPLATE: &str = "https://api.example.com/{version}/repos/{owner}/{repo}/issues/{number}/comments?page={page}&per_page={per_page}&sort={sort}&q={query}";
    let vars = vars!(
        version = "v3",
        owner = "rust-lang",
        repo = "rust",
        number = 12345,
        page = 2,
        per_page = 100,
        sort = "created",
        query = "label:C-bug is:open",
    );

    c.bench_function("many placeholders, parse and expand", |b| {
        b.iter(|| {
            let template = Template::parse(black_box(TEMPLATE)).unwrap();
            black_box(template.expand(&vars).unwrap());
        })
    });

    let template = Template::parse(TEMPLATE).unwrap();
    c.bench_function("many placeholders, expand only", |b| {
        b.iter(|| black_box(template.expand(black_box(&vars)).unwrap()))
    });
}

fn encode_heavy(c: &mut Criterion) {
    let value = "日本語のテキスト with spaces & symbols/?#".repeat(16);
    let template = Template::parse("/search?q={q}").unwrap();
    let values = [("q", value.as_str())];

    c.bench_function("encode heavy value", |b| {
        b.iter(|| black_box(template.expand(black_box(&values)).unwrap()))
    });
}

criterion_group!(benches, one_placeholder, many_placeholders, encode_heavy);
criterion_main!(benches);
