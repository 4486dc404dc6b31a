use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use multierr::{ErrorKind, ErrorValue, MultiError};

const SIZES: [usize; 4] = [1, 10, 100, 1000];

/// Aggregate of `n` tagged errors with distinct, unsorted messages.
fn build(n: usize) -> MultiError {
    let kind = ErrorKind::tag("bench");
    MultiError::new((0..n).map(|i| {
        ErrorValue::with_kind(kind, format!("validation failed for field #{}", (i * 7919) % n.max(1)))
    }))
    .expect("non-empty")
}

fn bench_message_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_rendering");

    for n in SIZES {
        let errs = build(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("message", n), &errs, |b, errs| {
            b.iter(|| black_box(errs.message()));
        });

        // Same output through the formatter, no up-front sizing.
        group.bench_with_input(BenchmarkId::new("to_string", n), &errs, |b, errs| {
            b.iter(|| black_box(errs.to_string()));
        });
    }

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for n in SIZES {
        let forward = build(n);
        let mut values = forward.unwrap_errors();
        values.reverse();
        let backward = MultiError::new(values).expect("non-empty");

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::new("reversed", n),
            &(forward, backward),
            |b, (forward, backward)| {
                b.iter(|| black_box(forward.similar(Some(backward))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_message_rendering, bench_similarity);
criterion_main!(benches);
