//! Key-value persistence for boards and players.
//!
//! Keys look like `board/<board id>` and `player/<board id>/<player id>`; values are the JSON
//! records from [`crate::protocol`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{sample_board, Board, Player};
use crate::protocol::{BoardRecord, PlayerRecord};

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> Result<()>;
    /// Returns whether a value was present.
    fn remove(&mut self, key: &str) -> Result<bool>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }
}

/// One JSON file per key under `root`. Key segments become nested directories.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`, and `.`/`..`
    /// segments are neutralized so a key can never escape the root.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut segments: Vec<String> = key
            .split('/')
            .filter(|s| !s.is_empty())
            .map(sanitize_segment)
            .collect();
        let file = format!("{}.json", segments.pop().unwrap_or_else(|| "_".to_string()));

        let mut path = self.root.clone();
        path.extend(segments);
        path.push(file);
        path
    }
}

fn sanitize_segment(segment: &str) -> String {
    if segment == "." || segment == ".." {
        return "_".repeat(segment.len());
    }
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create store dir {}", parent.display()))?;
        }
        fs::write(&path, value).with_context(|| format!("write {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("remove {}", path.display())),
        }
    }
}

pub fn board_key(board_id: &str) -> String {
    format!("board/{}", board_id)
}

pub fn player_key(board_id: &str, player_id: &str) -> String {
    format!("player/{}/{}", board_id, player_id)
}

/// Typed board/player access on top of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct MazeStore<S> {
    store: S,
}

impl<S: KeyValueStore> MazeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// `Ok(None)` when no board is stored under `board_id`. Malformed JSON or specs are
    /// errors.
    pub fn load_board(&self, board_id: &str) -> Result<Option<Board>> {
        let key = board_key(board_id);
        let Some(json) = self.store.get(&key)? else {
            log::debug!("store: no {}", key);
            return Ok(None);
        };
        let record: BoardRecord =
            serde_json::from_str(&json).with_context(|| format!("parse {}", key))?;
        let board = record
            .to_board()
            .with_context(|| format!("decode {}", key))?;
        log::debug!("store: loaded {} ({}x{})", key, board.rows(), board.cols());
        Ok(Some(board))
    }

    /// Load a board, substituting the built-in sample maze when it is missing or unreadable.
    pub fn load_board_or_default(&self, board_id: &str) -> Board {
        match self.load_board(board_id) {
            Ok(Some(board)) => board,
            Ok(None) => sample_board(board_id),
            Err(err) => {
                log::warn!("board {}: {:#}; using the sample maze", board_id, err);
                sample_board(board_id)
            }
        }
    }

    pub fn save_board(&mut self, board: &Board) -> Result<()> {
        let key = board_key(board.id());
        let json = serde_json::to_string(&BoardRecord::from_board(board))
            .with_context(|| format!("encode {}", key))?;
        self.store.put(&key, &json)?;
        log::debug!("store: saved {}", key);
        Ok(())
    }

    pub fn load_player(&self, board_id: &str, player_id: &str) -> Result<Option<Player>> {
        let key = player_key(board_id, player_id);
        let Some(json) = self.store.get(&key)? else {
            log::debug!("store: no {}", key);
            return Ok(None);
        };
        let record: PlayerRecord =
            serde_json::from_str(&json).with_context(|| format!("parse {}", key))?;
        Ok(Some(record.into()))
    }

    /// Load a player, or build one with `fresh` and save it when the record is missing or
    /// unreadable. An unreadable record is overwritten.
    pub fn load_player_or_else(
        &mut self,
        board_id: &str,
        player_id: &str,
        fresh: impl FnOnce() -> Player,
    ) -> Result<Player> {
        match self.load_player(board_id, player_id) {
            Ok(Some(player)) => return Ok(player),
            Ok(None) => {}
            Err(err) => log::warn!("player {}: {:#}; starting fresh", player_id, err),
        }
        let player = fresh();
        log::info!("new player {} on {}", player.id, player.board_id);
        self.save_player(&player)?;
        Ok(player)
    }

    pub fn save_player(&mut self, player: &Player) -> Result<()> {
        let key = player_key(&player.board_id, &player.id);
        let json = serde_json::to_string(&PlayerRecord::from(player))
            .with_context(|| format!("encode {}", key))?;
        self.store.put(&key, &json)?;
        log::debug!("store: saved {}", key);
        Ok(())
    }

    pub fn remove_player(&mut self, player: &Player) -> Result<bool> {
        self.store.remove(&player_key(&player.board_id, &player.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SAMPLE_SPEC;
    use crate::types::{Direction, Location};

    fn temp_root(tag: &str) -> PathBuf {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tui-maze-{}-{}-{}", tag, std::process::id(), nanos))
    }

    #[test]
    fn memory_store_put_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.put("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn file_store_paths_stay_under_root() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.path_for("player/default/p1"),
            PathBuf::from("/data/player/default/p1.json")
        );
        assert_eq!(
            store.path_for("board/../etc passwd"),
            PathBuf::from("/data/board/__/etc_passwd.json")
        );
    }

    #[test]
    fn file_store_round_trip() {
        let root = temp_root("fs");
        let mut store = FileStore::new(&root);
        assert_eq!(store.get("board/x").unwrap(), None);
        store.put("board/x", "{}").unwrap();
        assert_eq!(store.get("board/x").unwrap().as_deref(), Some("{}"));
        assert!(store.remove("board/x").unwrap());
        assert!(!store.remove("board/x").unwrap());
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn board_and_player_survive_the_store() {
        let mut maze = MazeStore::new(MemoryStore::new());
        let board = sample_board("lobby");
        maze.save_board(&board).unwrap();
        assert_eq!(maze.load_board("lobby").unwrap(), Some(board));
        assert_eq!(maze.load_board("missing").unwrap(), None);

        let player = Player::new("p1", "lobby", "Ada", Location::new(2, 3), Direction::West);
        maze.save_player(&player).unwrap();
        assert_eq!(maze.load_player("lobby", "p1").unwrap(), Some(player.clone()));
        assert!(maze.remove_player(&player).unwrap());
        assert_eq!(maze.load_player("lobby", "p1").unwrap(), None);
    }

    #[test]
    fn corrupt_player_record_is_replaced() {
        let mut inner = MemoryStore::new();
        inner.put("player/lobby/p1", "{not json").unwrap();
        let mut maze = MazeStore::new(inner);
        assert!(maze.load_player("lobby", "p1").is_err());

        let fresh = Player::new("p1", "lobby", "Ada", Location::new(0, 0), Direction::South);
        let player = maze
            .load_player_or_else("lobby", "p1", || fresh.clone())
            .unwrap();
        assert_eq!(player, fresh);
        assert_eq!(maze.load_player("lobby", "p1").unwrap(), Some(fresh));
    }

    #[test]
    fn stored_player_wins_over_fresh() {
        let mut maze = MazeStore::new(MemoryStore::new());
        let saved = Player::new("p1", "lobby", "Ada", Location::new(2, 1), Direction::East);
        maze.save_player(&saved).unwrap();

        let player = maze
            .load_player_or_else("lobby", "p1", || panic!("stored player should load"))
            .unwrap();
        assert_eq!(player, saved);
    }

    #[test]
    fn malformed_board_falls_back_to_sample() {
        let mut inner = MemoryStore::new();
        inner
            .put("board/bad", r#"{"id":"bad","spec":["---","|"]}"#)
            .unwrap();
        let maze = MazeStore::new(inner);

        assert!(maze.load_board("bad").is_err());
        let board = maze.load_board_or_default("bad");
        assert_eq!(board.id(), "bad");
        assert_eq!(board.rows(), SAMPLE_SPEC.len() / 2);
    }
}
