//! Criterion benchmarks for rankbase.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use rankbase::engine::{compute_rankings, RankingEngine};
use rankbase::signal::SignalExtractor;
use rankbase::store::{RecordStore, StoreBuilder};
use rankbase::types::{EntityRecord, Scope};

/// Build a store of synthetic records with randomized signal fields.
fn make_large_store(entity_count: usize) -> RecordStore {
    let mut rng = rand::thread_rng();
    let types = ["pl", "library", "vm", "framework"];

    let mut builder = StoreBuilder::new();
    for i in 0..entity_count {
        let mut record = EntityRecord::builder(format!("entity_{}", i))
            .entity_type(types[i % types.len()])
            .int("githubRepo stars", rng.gen_range(0..100_000))
            .int("meetup members", rng.gen_range(0..5_000))
            .series(
                "linkedInSkill",
                [
                    (2020, rng.gen_range(0..50_000)),
                    (2022, rng.gen_range(0..80_000)),
                ],
            )
            .series("indeedJobs", [(2022, rng.gen_range(0..2_000))]);
        if i > 0 {
            record = record.link(format!("entity_{}", rng.gen_range(0..i)));
        }
        builder = builder.record(record.build());
    }
    builder.build().expect("ids are unique")
}

fn bench_compute_rankings(c: &mut Criterion) {
    let store = make_large_store(2_000);
    let extractor = SignalExtractor::new();

    c.bench_function("compute_rankings_2k", |b| {
        b.iter(|| compute_rankings(&store, &extractor).unwrap());
    });
}

fn bench_rank_lookups(c: &mut Criterion) {
    let engine = RankingEngine::new(make_large_store(2_000));
    engine.rankings().unwrap();

    c.bench_function("rank_lookup", |b| {
        b.iter(|| engine.rank("entity_1000", Scope::Global).unwrap());
    });

    c.bench_function("entity_at_rank", |b| {
        b.iter(|| engine.entity_at_rank(999, Scope::Global).unwrap());
    });

    c.bench_function("percentile", |b| {
        b.iter(|| engine.percentile("entity_1000").unwrap());
    });
}

criterion_group!(benches, bench_compute_rankings, bench_rank_lookups);
criterion_main!(benches);
