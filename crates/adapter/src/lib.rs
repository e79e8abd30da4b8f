//! Adapter module - records, wire messages, persistence and configuration
//!
//! Everything that crosses the process boundary lives here: the JSON form of boards and
//! players, the line-delimited message envelope, the key-value store the binary saves to,
//! and `MAZE_*` environment configuration.
//!
//! # Records
//!
//! ```text
//! {"id":"default","spec":["------","|  |  ",...,"------"]}
//! {"id":"player-1","boardId":"default","name":"Player","location":{"row":0,"col":0},"direction":"south"}
//! ```
//!
//! # Messages
//!
//! Every message carries `type`, `seq` and `ts` (milliseconds):
//!
//! - **board**: full board snapshot (`board` is a board record)
//! - **player**: player joined, moved or turned (`player` is a player record)
//! - **leave**: `boardId` + `playerId` of a player that left
//!
//! Unknown `type` values parse as [`ParsedMessage::Unknown`] instead of failing.
//!
//! # Store keys
//!
//! - `board/<board id>`
//! - `player/<board id>/<player id>`
//!
//! # Environment Variables
//!
//! - `MAZE_STORE_DIR`: store directory (default: ".tui-maze")
//! - `MAZE_BOARD_ID`: board to open (default: "default")
//! - `MAZE_PLAYER_ID` / `MAZE_PLAYER_NAME`: local player (default: "player-1" / "Player")
//! - `MAZE_LOG_PATH`: log file for the terminal binary
//! - `MAZE_MEMORY_STORE`: "1" or "true" keeps everything in memory

pub mod config;
pub mod protocol;
pub mod store;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use config::MazeConfig;
pub use protocol::*;
pub use store::{board_key, player_key, FileStore, KeyValueStore, MazeStore, MemoryStore};
