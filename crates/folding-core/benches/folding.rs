use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use folding_core::{
    ExpandDirection, FoldingConfig, FoldingState, FoldingStateManager, Reference,
    calculate_visible_ranges,
};

fn scattered_references(count: usize, total_lines: usize) -> Vec<Reference> {
    let stride = total_lines / count.max(1);
    // Reverse order so the sort step does real work.
    (0..count)
        .rev()
        .map(|i| {
            let start = i * stride + 1;
            Reference::with_lines(format!("ref-{i}"), start, start + 4)
        })
        .collect()
}

fn bench_visible_ranges(c: &mut Criterion) {
    let references = scattered_references(2_000, 50_000);
    c.bench_function("visible_ranges/2k_refs_50k_lines", |b| {
        b.iter(|| black_box(calculate_visible_ranges(black_box(&references), 50_000, 3)))
    });
}

fn bench_initial_state(c: &mut Criterion) {
    let references = scattered_references(2_000, 50_000);
    c.bench_function("initial_state/2k_refs_50k_lines", |b| {
        b.iter(|| black_box(FoldingState::new(references.clone(), 50_000, 3)))
    });
}

fn bench_expand_every_region(c: &mut Criterion) {
    let references = scattered_references(500, 50_000);
    c.bench_function("expand/500_regions_down", |b| {
        b.iter_batched(
            || FoldingStateManager::new(references.clone(), 50_000, FoldingConfig::default()),
            |mut manager| {
                // Indices shift as gaps close; indices past the end are no-ops.
                for index in 0..manager.state().hidden_regions().len() {
                    manager.expand(index, ExpandDirection::Down);
                }
                black_box(manager.version());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_resize(c: &mut Criterion) {
    let state = FoldingState::new(scattered_references(2_000, 50_000), 50_000, 3);
    c.bench_function("resize/grow_by_one", |b| {
        b.iter(|| black_box(state.on_document_resize(black_box(50_001))))
    });
}

criterion_group!(
    benches,
    bench_visible_ranges,
    bench_initial_state,
    bench_expand_every_region,
    bench_resize
);
criterion_main!(benches);
