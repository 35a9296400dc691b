use criterion::{black_box, criterion_group, criterion_main, Criterion};
use klotski_engine::perft::{perft, perft_memo};
use klotski_engine::{successors, Level};

fn bench_successors(c: &mut Criterion) {
    for level in Level::all() {
        let board = level.board();
        c.bench_function(&format!("successors_{}", level.name), |b| {
            b.iter(|| successors(black_box(&board)))
        });
    }
}

fn bench_perft(c: &mut Criterion) {
    let board = Level::classic().board();

    c.bench_function("perft_depth_3", |b| {
        b.iter(|| perft(black_box(&board), 3))
    });

    c.bench_function("perft_depth_5", |b| {
        b.iter(|| perft(black_box(&board), 5))
    });

    c.bench_function("perft_memo_depth_5", |b| {
        b.iter(|| perft_memo(black_box(&board), 5))
    });
}

criterion_group!(benches, bench_successors, bench_perft);
criterion_main!(benches);
