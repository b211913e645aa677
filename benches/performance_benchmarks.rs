use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planrs::catalog::ALL_FOCUS_KINDS;
use planrs::duration::DurationCalculator;
use planrs::flatten::{FocusFlattener, FocusInput};
use planrs::focus::FocusBuilder;
use planrs::models::SegmentSelection;

/// Performance benchmarks for the derivation pipeline
///
/// Every operation is expected to be O(1) over the fixed-size catalogs; these
/// benchmarks guard against regressions in the hot flattening path.

fn bench_focus_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("Focus Builder");

    group.bench_function("build_focus_only", |b| {
        b.iter(|| {
            FocusBuilder::build_focus_configuration(
                black_box("strength_training"),
                black_box("Strength Training"),
                None,
                None,
            )
        });
    });

    group.bench_function("build_focus_with_format", |b| {
        b.iter(|| {
            FocusBuilder::build_focus_configuration(
                black_box("hiit"),
                black_box("HIIT"),
                black_box(Some("tabata")),
                black_box(Some("Tabata")),
            )
        });
    });

    group.finish();
}

fn bench_duration_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("Duration Calculator");

    group.bench_function("build_duration_configuration", |b| {
        b.iter(|| {
            DurationCalculator::build_duration_configuration(
                black_box(60),
                SegmentSelection { included: true, duration: 8 },
                SegmentSelection { included: true, duration: 7 },
            )
        });
    });

    group.bench_function("validate_time_allocation", |b| {
        b.iter(|| DurationCalculator::validate_time_allocation(black_box(45), 5, 5));
    });

    group.finish();
}

fn bench_flattener(c: &mut Criterion) {
    let mut group = c.benchmark_group("Flattener");

    let structured = FocusInput::Structured(FocusBuilder::build_focus_configuration(
        "powerlifting",
        "Powerlifting",
        Some("conjugate"),
        None,
    ));
    let legacy = FocusInput::Legacy("strength".to_string());

    group.bench_function("flatten_structured", |b| {
        b.iter(|| FocusFlattener::flatten_focus_data(black_box(Some(&structured))));
    });

    group.bench_function("flatten_legacy", |b| {
        b.iter(|| FocusFlattener::flatten_focus_data(black_box(Some(&legacy))));
    });

    // full catalog sweep at increasing batch sizes
    for &size in &[1usize, 10, 100] {
        let inputs: Vec<FocusInput> = (0..size)
            .map(|i| {
                let kind = ALL_FOCUS_KINDS[i % ALL_FOCUS_KINDS.len()];
                FocusInput::Structured(FocusBuilder::build_focus_configuration(
                    kind.id(),
                    kind.label(),
                    kind.formats().first().map(|f| f.id),
                    None,
                ))
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("flatten_batch", size), &inputs, |b, inputs| {
            b.iter(|| {
                for input in inputs {
                    let _ = FocusFlattener::flatten_focus_data(Some(input));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_focus_builder,
    bench_duration_calculator,
    bench_flattener
);
criterion_main!(benches);
