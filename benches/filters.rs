use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ghsearch::search::filters::{has_filter, has_repo_filter, has_specific_filter, has_type_filter};
use std::hint::black_box;

const LONG_QUERY: &str = "repo:github/github-mcp-server is:issue label:bug label:enhancement author:octocat created:>2024-01-01 updated:<2024-12-31";
const OR_QUERY: &str = "repo:github/github-mcp-server is:issue (label:critical OR label:urgent)";

fn bench_has_filter(c: &mut Criterion) {
    let cases = [
        ("simple", "is:issue bug report", "is"),
        ("complex_or", OR_QUERY, "is"),
        ("long", LONG_QUERY, "repo"),
        ("absent", "some text with no filter present in this query at all", "is"),
    ];

    let mut group = c.benchmark_group("has_filter");
    for (name, query, filter) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, query| {
            b.iter(|| has_filter(black_box(query), black_box(filter)))
        });
    }
    group.finish();
}

fn bench_has_specific_filter(c: &mut Criterion) {
    let cases = [
        ("simple", "is:issue bug report"),
        ("complex_or", OR_QUERY),
        ("long", LONG_QUERY),
        ("absent", "some text with no specific filter value in this query"),
        ("multiple_is", "is:issue is:open is:closed bug report"),
    ];

    let mut group = c.benchmark_group("has_specific_filter");
    for (name, query) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &query, |b, query| {
            b.iter(|| has_specific_filter(black_box(query), "is", "issue"))
        });
    }
    group.finish();
}

fn bench_wrappers(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrappers");

    for (name, query) in [
        ("with_repo", "repo:github/github-mcp-server is:issue bug"),
        ("without_repo", "is:issue bug report critical"),
        ("complex_repo", "repo:github/github-mcp-server is:issue (label:critical OR label:urgent) author:octocat"),
    ] {
        group.bench_with_input(BenchmarkId::new("repo", name), &query, |b, query| {
            b.iter(|| has_repo_filter(black_box(query)))
        });
    }

    for (name, query) in [
        ("with_type", "type:user location:seattle followers:>50"),
        ("without_type", "location:seattle followers:>50"),
        ("complex_type", "type:user (location:seattle OR location:california) followers:>100"),
    ] {
        group.bench_with_input(BenchmarkId::new("type", name), &query, |b, query| {
            b.iter(|| has_type_filter(black_box(query)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_has_filter, bench_has_specific_filter, bench_wrappers);
criterion_main!(benches);
