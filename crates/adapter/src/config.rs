//! Runtime configuration read from `MAZE_*` environment variables.

use std::env;
use std::path::PathBuf;

use crate::types::DEFAULT_BOARD_ID;

pub const DEFAULT_STORE_DIR: &str = ".tui-maze";
pub const DEFAULT_PLAYER_ID: &str = "player-1";
pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub store_dir: PathBuf,
    pub board_id: String,
    pub player_id: String,
    pub player_name: String,
    pub log_path: Option<PathBuf>,
    /// Keep everything in memory; nothing is written to `store_dir`.
    pub memory_store: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            board_id: DEFAULT_BOARD_ID.to_string(),
            player_id: DEFAULT_PLAYER_ID.to_string(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            log_path: None,
            memory_store: false,
        }
    }
}

impl MazeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Missing or blank values use the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };
        let defaults = Self::default();

        Self {
            store_dir: var("MAZE_STORE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.store_dir),
            board_id: var("MAZE_BOARD_ID").unwrap_or(defaults.board_id),
            player_id: var("MAZE_PLAYER_ID").unwrap_or(defaults.player_id),
            player_name: var("MAZE_PLAYER_NAME").unwrap_or(defaults.player_name),
            log_path: var("MAZE_LOG_PATH").map(PathBuf::from),
            memory_store: var("MAZE_MEMORY_STORE")
                .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}
