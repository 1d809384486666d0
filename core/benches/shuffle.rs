use criterion::{Criterion, criterion_group, criterion_main};
use memoria_core::{DeckConfig, DeckShuffler, MatchEngine, RandomShuffler};
use std::hint::black_box;

fn shuffle_benchmark(c: &mut Criterion) {
    let classic = DeckConfig::classic();
    let large = DeckConfig::from_pairs((0..128).map(|i| format!("card-{i}"))).unwrap();

    let mut shuffler = RandomShuffler::new(0);
    c.bench_function("shuffle classic", |b| {
        b.iter(|| shuffler.shuffled(black_box(classic.identities().to_vec())))
    });
    c.bench_function("shuffle 256 cards", |b| {
        b.iter(|| shuffler.shuffled(black_box(large.identities().to_vec())))
    });

    let mut engine = MatchEngine::new(large, RandomShuffler::new(1));
    c.bench_function("reset 256 cards", |b| b.iter(|| engine.reset().len()));
}

criterion_group!(benches, shuffle_benchmark);
criterion_main!(benches);
