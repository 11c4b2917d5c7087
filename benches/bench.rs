use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use slice_partition::{
    partial_sort, partition, partition_point, patterns, select_nth, sort_subrange,
};

fn bench_op(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
    op_name: &str,
    op: impl Fn(&mut Vec<i32>),
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{op_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| op(black_box(&mut test_data)),
            batch_size,
        )
    });
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_binary", |size| {
            patterns::random_uniform(size, 0..=1)
        }),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saws", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        bench_op(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "partition",
            |v| {
                black_box(partition(v, |x| x % 2 == 0));
            },
        );

        bench_op(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "partition_point",
            |v| {
                // Locate the boundary of a pre-partitioned input. The
                // partition step dominates the setup, the measured scan is
                // logarithmic.
                partition(v, |x| x % 2 == 0);
                black_box(partition_point(v, |x| x % 2 == 0));
            },
        );

        bench_op(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "select_nth",
            |v| {
                select_nth(v, v.len() / 2);
            },
        );

        bench_op(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "partial_sort",
            |v| {
                let len = v.len();
                partial_sort(v, len / 2);
            },
        );

        bench_op(
            c,
            test_size,
            pattern_name,
            pattern_provider,
            "sort_subrange",
            |v| {
                let len = v.len();
                sort_subrange(v, len / 4..(len / 4) * 3);
            },
        );
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [36, 101, 1_000, 10_000, 100_000];

    for test_size in test_sizes {
        bench_patterns(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
