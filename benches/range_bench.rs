use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rangespec::{Discard, Range, format, parse};

// A spec with many short sections, reversed bounds and negative numbers
fn bench_spec() -> String {
    (0..500)
        .map(|i| match i % 4 {
            0 => format!("{}", i * 10),
            1 => format!("{}..{}", i * 10, i * 10 + 5),
            2 => format!("{}..{}", i * 10 + 7, i * 10),
            _ => format!("-{}..-{}", i * 10 + 3, i * 10),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_pipeline(c: &mut Criterion) {
    let spec = bench_spec();
    let mut group = c.benchmark_group("Range Pipeline");

    group.bench_with_input(BenchmarkId::new("parse", "500_sections"), &spec, |b, spec| {
        b.iter(|| parse(black_box(spec), &mut Discard))
    });

    group.bench_with_input(BenchmarkId::new("build", "500_sections"), &spec, |b, spec| {
        b.iter(|| {
            let mut range = Range::with_sink(Discard);
            range.add_range([black_box(spec.as_str())]).map(|_| range.size())
        })
    });

    let range = {
        let mut range = Range::with_sink(Discard);
        let _ = range.add_range([spec.as_str()]);
        range
    };
    let sorted = range.sorted_values();
    group.bench_with_input(BenchmarkId::new("format", "500_sections"), &sorted, |b, sorted| {
        b.iter(|| format(black_box(sorted)))
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
