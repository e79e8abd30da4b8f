//! Terminal maze runner (default binary).
//!
//! Loads the configured board and local player from the store, then walks the maze in a
//! first-person view. Uses crossterm for input and the framebuffer-based renderer from
//! `tui_maze::term`.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::adapter::{FileStore, KeyValueStore, MazeConfig, MazeStore, MemoryStore};
use tui_maze::core::{Player, Session};
use tui_maze::input::{map_key, should_quit};
use tui_maze::term::{FrameBuffer, MazeView, TerminalRenderer, Viewport};
use tui_maze::types::{Direction, Location};

fn main() -> Result<()> {
    let config = MazeConfig::from_env();
    init_logging(&config)?;
    log::info!("tui-maze starting: board {}, player {}", config.board_id, config.player_id);

    if config.memory_store {
        run_with_store(&config, MazeStore::new(MemoryStore::new()))
    } else {
        run_with_store(&config, MazeStore::new(FileStore::new(&config.store_dir)))
    }
}

/// The terminal is in raw mode while running, so logs go to `MAZE_LOG_PATH` when set and
/// otherwise only warnings reach stderr.
fn init_logging(config: &MazeConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder
                .filter_level(log::LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    builder.parse_default_env();
    builder.init();
    Ok(())
}

fn run_with_store<S: KeyValueStore>(config: &MazeConfig, mut store: MazeStore<S>) -> Result<()> {
    let board = store.load_board_or_default(&config.board_id);
    let player = store.load_player_or_else(&config.board_id, &config.player_id, || {
        Player::new(
            config.player_id.clone(),
            config.board_id.clone(),
            config.player_name.clone(),
            Location::new(0, 0),
            Direction::South,
        )
    })?;
    let session = Session::new(board, &player, seed_from_clock());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<S: KeyValueStore>(
    term: &mut TerminalRenderer,
    mut session: Session,
    store: &mut MazeStore<S>,
) -> Result<()> {
    let view = MazeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(session.board(), session.player(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!("quit");
                    return Ok(());
                }
                let Some(action) = map_key(key) else {
                    continue;
                };

                let outcome = session.apply(action);
                if outcome.board_changed {
                    if let Err(err) = store.save_board(session.board()) {
                        log::warn!("save board: {:#}", err);
                    }
                }
                if outcome.player_changed {
                    if let Err(err) = store.save_player(session.player()) {
                        log::warn!("save player: {:#}", err);
                    }
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn seed_from_clock() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
