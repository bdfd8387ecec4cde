use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use streamer_sheet::name_match::{DEFAULT_THRESHOLD, best_match};

const FIRST: &[&str] = &[
    "Zack", "Tarik", "Framber", "Paul", "Luis", "Logan", "Hunter", "Spencer", "Garrett", "Cole",
];
const LAST: &[&str] = &[
    "Wheeler", "Skubal", "Valdez", "Skenes", "Castillo", "Webb", "Greene", "Strider", "Crochet",
    "Ragans", "Gilbert", "Kirby",
];

fn reference_pool() -> Vec<String> {
    let mut out = Vec::with_capacity(FIRST.len() * LAST.len());
    for first in FIRST {
        for last in LAST {
            out.push(format!("{first} {last}"));
        }
    }
    out
}

fn bench_matching(c: &mut Criterion) {
    let refs = reference_pool();

    c.bench_function("best_match_fuzzy_120_refs", |b| {
        b.iter(|| best_match(black_box("Framber Valdéz"), &refs, DEFAULT_THRESHOLD))
    });

    c.bench_function("best_match_exact_short_circuit", |b| {
        b.iter(|| best_match(black_box("Cole Kirby"), &refs, DEFAULT_THRESHOLD))
    });

    c.bench_function("best_match_unmatched", |b| {
        b.iter(|| best_match(black_box("Jake Irish"), &refs, DEFAULT_THRESHOLD))
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
