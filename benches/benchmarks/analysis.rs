use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use fretwise::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_fret_lines() -> Vec<Vec<FretPosition>> {
    [
        "x32010",
        "320003",
        "022000",
        "x02010",
        "x 3 2 3 x x",
        "x 10 12 12 11 x",
        "8 10 10 9 8 8",
        "x x 0 2 3 2",
    ]
    .iter()
    .map(|tab| FretPosition::parse_tab(tab).unwrap())
    .collect()
}

// ---------------------------------------------------------------------------------------------

pub fn analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analysis");
    let tuning = Tuning::standard();
    let lines = create_fret_lines();
    group.bench_function("Voicings", |b| {
        b.iter(|| {
            for frets in &lines {
                black_box(analyze_voicing(frets, tuning));
            }
        })
    });
    group.bench_function("Keys", |b| {
        let analyses = lines
            .iter()
            .map(|frets| analyze_voicing(frets, tuning))
            .collect::<Vec<_>>();
        b.iter(|| {
            for analysis in &analyses {
                black_box(analysis.keys());
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = analysis;
    config = Criterion::default();
    targets = analyze
}
