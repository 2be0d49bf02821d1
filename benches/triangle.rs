use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sim_game::{find_triangle, BoardConfig, Color, RandomPlayer, RulesEngine, SimGame};

/// A dense board with no triangle: red owns edges between even and odd
/// vertices, blue owns a bipartite subset of the same-parity edges.
fn bipartite_board(n: usize) -> SimGame {
    let mut game = SimGame::with_config(BoardConfig::new(n).with_max_vertices(n)).unwrap();
    let evens: Vec<u8> = (0..n as u8).step_by(2).collect();
    let odds: Vec<u8> = (1..n as u8).step_by(2).collect();
    let mut blue = (0..n as u8)
        .flat_map(|a| (a + 1..n as u8).map(move |b| (a, b)))
        .filter(|(a, b)| a % 2 == b % 2 && (a / 2) % 2 != (b / 2) % 2);
    for &a in &evens {
        for &b in &odds {
            game.play(a, b);
            match blue.next() {
                Some((x, y)) => {
                    game.play(x, y);
                }
                None => return game,
            }
        }
    }
    game
}

fn bench_find_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_triangle");
    for n in [6usize, 10, 32, 64] {
        let game = bipartite_board(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &game, |b, game| {
            b.iter(|| find_triangle(black_box(game.state()), Color::Red))
        });
    }
    group.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("random_playout_k10", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut game = SimGame::new(10).unwrap();
            RandomPlayer::new(seed).play_out(&mut game)
        })
    });
}

criterion_group!(benches, bench_find_triangle, bench_random_playout);
criterion_main!(benches);
