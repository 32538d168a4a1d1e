use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pinhash::digest::{Digester, Sha256Digester};
use pinhash::game::{filter_input, Game};
use pinhash::session::SessionManager;
use pinhash::store::MemoryStore;

// 1. Digest of a single guess
fn bench_digest(c: &mut Criterion) {
    let digester = Sha256Digester::new();
    c.bench_function("sha256_digest_guess", |b| {
        b.iter(|| digester.digest(black_box("457")))
    });
}

// 2. Live input sanitization
fn bench_filter_input(c: &mut Criterion) {
    c.bench_function("filter_input_mixed", |b| {
        b.iter(|| filter_input(black_box("4a-5 7x9")))
    });
}

// 3. Worst case brute force: every guess until the last PIN in range
fn bench_full_sweep(c: &mut Criterion) {
    let digest = Sha256Digester.digest("999");
    c.bench_function("sweep_all_pins", |b| {
        b.iter(|| {
            let store = MemoryStore::with_entries([
                ("pin", "999"),
                ("sha256", digest.as_str()),
                ("attempts", "0"),
            ]);
            let mut game = Game::new(SessionManager::new(store, Sha256Digester));
            game.publish_digest().unwrap();
            for n in 100..=999u16 {
                game.submit_guess(&n.to_string()).unwrap();
            }
            black_box(game.attempts())
        })
    });
}

criterion_group!(benches, bench_digest, bench_filter_input, bench_full_sweep);
criterion_main!(benches);
