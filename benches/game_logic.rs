use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match_three::core::{
    detect, find_valid_swaps, new_session, request_swap, Board, Resolver, TileRng,
};
use match_three::types::{Coord, SwapOutcome};

fn bench_detect(c: &mut Criterion) {
    let session = new_session(8, 8, 6, Some(12345)).unwrap();
    let board = session.board_view().clone();

    c.bench_function("detect_8x8", |b| {
        b.iter(|| detect(black_box(&board)));
    });
}

fn bench_cascade(c: &mut Criterion) {
    let mut tiles = TileRng::new(12345, 6);
    let mut resolver = Resolver::default();

    c.bench_function("resolve_cascade_random_8x8", |b| {
        b.iter(|| {
            // A raw random board usually carries several matches
            let mut board = Board::random(8, 8, &mut tiles);
            let mut score = 0;
            resolver
                .resolve_cascade(&mut board, &mut score, &mut tiles)
                .unwrap();
            score
        })
    });
}

fn bench_request_swap(c: &mut Criterion) {
    let session = new_session(8, 8, 6, Some(12345)).unwrap();
    let mut board = session.board_view().clone();

    c.bench_function("request_swap", |b| {
        b.iter(|| {
            // Every iteration starts from the same board
            let outcome = request_swap(&mut board, Coord::new(7, 0), Coord::new(7, 1));
            if let Ok(SwapOutcome::Committed) = outcome {
                board.swap(Coord::new(7, 0), Coord::new(7, 1)).unwrap();
            }
        })
    });
}

fn bench_valid_swaps(c: &mut Criterion) {
    let session = new_session(8, 8, 6, Some(12345)).unwrap();
    let board = session.board_view().clone();

    c.bench_function("find_valid_swaps_8x8", |b| {
        b.iter(|| find_valid_swaps(black_box(&board)));
    });
}

criterion_group!(
    benches,
    bench_detect,
    bench_cascade,
    bench_request_swap,
    bench_valid_swaps
);
criterion_main!(benches);
