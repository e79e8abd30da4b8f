use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_maze::core::{
    board_to_spec, generate, move_player, spec_to_board, Board, Player, SAMPLE_SPEC,
};
use tui_maze::engine::{corridor_segments, DepthTable};
use tui_maze::types::{Direction, Location, MoveCommand};

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_sample_spec", |b| {
        b.iter(|| spec_to_board(black_box("default"), black_box(&SAMPLE_SPEC)))
    });

    let spec = board_to_spec(&generate("big", 20, 20, 1));
    c.bench_function("decode_20x20_spec", |b| {
        b.iter(|| spec_to_board(black_box("big"), black_box(&spec)))
    });
}

fn bench_render_cells(c: &mut Criterion) {
    let board = generate("big", 20, 20, 7);
    let table = DepthTable::new(60.0);

    c.bench_function("render_cells_open_row", |b| {
        let open = Board::new("open", 1, 20);
        b.iter(|| table.render_cells(black_box(Location::new(0, 0)), Direction::East, &open))
    });

    c.bench_function("render_cells_and_segments_maze", |b| {
        b.iter(|| {
            let mut segments = 0;
            for cell in table.render_cells(black_box(Location::new(10, 10)), Direction::North, &board) {
                segments += corridor_segments(&cell, 60.0).len();
            }
            segments
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate_20x20", |b| {
        let mut seed = 0u32;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            generate("gen", 20, 20, black_box(seed))
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new("open", 3, 3);
    let mut player = Player::new("p", "open", "P", Location::new(1, 1), Direction::North);
    board.add_player(&player);

    c.bench_function("move_player_turn", |b| {
        b.iter(|| {
            player = move_player(black_box(MoveCommand::TurnRight), &player, &mut board);
        })
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_render_cells,
    bench_generate,
    bench_move
);
criterion_main!(benches);
