use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use fretwise::prelude::*;

// ---------------------------------------------------------------------------------------------

const CHORDS: [(&str, &str); 6] = [
    ("C", "Major"),
    ("A", "Minor7"),
    ("F#", "HalfDiminished7"),
    ("Bb", "Dominant9"),
    ("E", "Sus4"),
    ("G", "Major7"),
];

// ---------------------------------------------------------------------------------------------

pub fn solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver");
    let tuning = Tuning::standard();
    group.bench_function("Chord Shapes", |b| {
        b.iter(|| {
            for (root, quality) in CHORDS {
                black_box(solve_chord_shapes(root, quality, tuning));
            }
        })
    });
    group.bench_function("Best Voicings", |b| {
        b.iter(|| {
            for (root, quality) in CHORDS {
                black_box(get_best_voicings(root, quality, 8, tuning));
            }
        })
    });
    group.finish();
}

pub fn triads(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver");
    let tuning = Tuning::standard();
    group.bench_function("Triads", |b| {
        b.iter(|| {
            for root in ["C", "D#", "Gb", "A"] {
                for quality in ["Major", "Minor", "Diminished", "Augmented"] {
                    black_box(solve_triads(root, quality, tuning));
                }
            }
        })
    });
    group.finish();
}

pub fn adapt(c: &mut Criterion) {
    let mut group = c.benchmark_group("Solver");
    let voicings = solve_chord_shapes("D", "Major", Tuning::standard());
    let tunings = Tuning::preset_names()
        .into_iter()
        .filter_map(Tuning::from_name)
        .collect::<Vec<_>>();
    group.bench_function("Adapt", |b| {
        b.iter(|| {
            for tuning in &tunings {
                black_box(adapt_voicings(&voicings, tuning));
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = solver;
    config = Criterion::default();
    targets = solve, triads, adapt
}
