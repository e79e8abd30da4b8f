//! Protocol module - JSON records and messages for boards and players
//!
//! Records are the persisted/encoded form of the core model. Messages wrap records in the
//! line-delimited envelope every message shares: type, seq (sequence number), ts (timestamp
//! in ms).

use serde::{Deserialize, Serialize};

use crate::core::{board_to_spec, spec_to_board, Board, Player, SpecError};
use crate::types::{Direction, Location};

// ============== Records ==============

/// Encoded board: id plus its spec lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    pub id: String,
    pub spec: Vec<String>,
}

impl BoardRecord {
    pub fn from_board(board: &Board) -> Self {
        Self {
            id: board.id().to_string(),
            spec: board_to_spec(board),
        }
    }

    /// Decode back into a board. Occupants are not part of the record.
    pub fn to_board(&self) -> Result<Board, SpecError> {
        spec_to_board(&self.id, &self.spec)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationRecord {
    pub row: i32,
    pub col: i32,
}

impl From<Location> for LocationRecord {
    fn from(location: Location) -> Self {
        Self {
            row: location.row,
            col: location.col,
        }
    }
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        Location::new(record.row, record.col)
    }
}

/// Direction as a lowercase name on the wire; accepted in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionName(pub Direction);

impl<'de> Deserialize<'de> for DirectionName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(Self(Direction::North)),
            "east" => Ok(Self(Direction::East)),
            "south" => Ok(Self(Direction::South)),
            "west" => Ok(Self(Direction::West)),
            _ => Err(serde::de::Error::custom(format!("invalid direction: {}", s))),
        }
    }
}

impl Serialize for DirectionName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

/// Encoded player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    #[serde(rename = "boardId")]
    pub board_id: String,
    pub name: String,
    pub location: LocationRecord,
    pub direction: DirectionName,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            board_id: player.board_id.clone(),
            name: player.name.clone(),
            location: player.location.into(),
            direction: DirectionName(player.direction),
        }
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Player::new(
            record.id,
            record.board_id,
            record.name,
            record.location.into(),
            record.direction.0,
        )
    }
}

// ============== Messages ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardType {
    #[serde(rename = "board")]
    Board,
}

impl Default for BoardType {
    fn default() -> Self {
        Self::Board
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerType {
    #[serde(rename = "player")]
    Player,
}

impl Default for PlayerType {
    fn default() -> Self {
        Self::Player
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    #[serde(rename = "leave")]
    Leave,
}

impl Default for LeaveType {
    fn default() -> Self {
        Self::Leave
    }
}

/// Full board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: BoardType,
    pub seq: u64,
    pub ts: u64,
    pub board: BoardRecord,
}

/// Player state (join, move or turn).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: PlayerType,
    pub seq: u64,
    pub ts: u64,
    pub player: PlayerRecord,
}

/// A player left a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: LeaveType,
    pub seq: u64,
    pub ts: u64,
    #[serde(rename = "boardId")]
    pub board_id: String,
    #[serde(rename = "playerId")]
    pub player_id: String,
}

/// Parsed incoming message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedMessage {
    Board(BoardMessage),
    Player(PlayerMessage),
    Leave(LeaveMessage),
    Unknown(UnknownMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMessage {
    pub seq: u64,
}

/// Parse one JSON line.
///
/// An unrecognized `type` yields [`ParsedMessage::Unknown`]; a known type with a bad body
/// is still an error.
pub fn parse_message(json: &str) -> Result<ParsedMessage, serde_json::Error> {
    #[derive(Debug, Deserialize)]
    #[serde(tag = "type")]
    enum InboundMessage {
        #[serde(rename = "board")]
        Board(BoardMessage),
        #[serde(rename = "player")]
        Player(PlayerMessage),
        #[serde(rename = "leave")]
        Leave(LeaveMessage),
    }

    match serde_json::from_str::<InboundMessage>(json) {
        Ok(InboundMessage::Board(m)) => Ok(ParsedMessage::Board(m)),
        Ok(InboundMessage::Player(m)) => Ok(ParsedMessage::Player(m)),
        Ok(InboundMessage::Leave(m)) => Ok(ParsedMessage::Leave(m)),
        Err(e) => {
            #[derive(Debug, Deserialize)]
            struct Envelope {
                #[serde(rename = "type")]
                msg_type: Option<String>,
                seq: Option<u64>,
            }
            let envelope = serde_json::from_str::<Envelope>(json)?;
            let msg_type = envelope.msg_type.as_deref().unwrap_or("unknown");
            if !matches!(msg_type, "board" | "player" | "leave") {
                return Ok(ParsedMessage::Unknown(UnknownMessage {
                    seq: envelope.seq.unwrap_or(0),
                }));
            }
            Err(e)
        }
    }
}

// ============== Utility Functions ==============

pub fn create_board_message(seq: u64, board: &Board) -> BoardMessage {
    BoardMessage {
        msg_type: BoardType::Board,
        seq,
        ts: current_timestamp_ms(),
        board: BoardRecord::from_board(board),
    }
}

pub fn create_player_message(seq: u64, player: &Player) -> PlayerMessage {
    PlayerMessage {
        msg_type: PlayerType::Player,
        seq,
        ts: current_timestamp_ms(),
        player: PlayerRecord::from(player),
    }
}

pub fn create_leave_message(seq: u64, player: &Player) -> LeaveMessage {
    LeaveMessage {
        msg_type: LeaveType::Leave,
        seq,
        ts: current_timestamp_ms(),
        board_id: player.board_id.clone(),
        player_id: player.id.clone(),
    }
}

/// Serialize a message as one line (no trailing newline).
pub fn to_line<T: Serialize>(message: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(message)
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample_board;

    #[test]
    fn test_parse_player_message() {
        let json = r#"{"type":"player","seq":3,"ts":100,"player":{"id":"p1","boardId":"default","name":"Ada","location":{"row":2,"col":1},"direction":"East"}}"#;
        match parse_message(json).unwrap() {
            ParsedMessage::Player(msg) => {
                assert_eq!(msg.seq, 3);
                let player = Player::from(msg.player);
                assert_eq!(player.location, Location::new(2, 1));
                assert_eq!(player.direction, Direction::East);
                assert_eq!(player.board_id, "default");
            }
            other => panic!("Expected Player message, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_leave_message() {
        let json = r#"{"type":"leave","seq":9,"ts":1,"boardId":"b","playerId":"p"}"#;
        match parse_message(json).unwrap() {
            ParsedMessage::Leave(msg) => {
                assert_eq!(msg.board_id, "b");
                assert_eq!(msg.player_id, "p");
            }
            other => panic!("Expected Leave message, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_not_an_error() {
        let json = r#"{"type":"ping","seq":42,"ts":0}"#;
        assert_eq!(
            parse_message(json).unwrap(),
            ParsedMessage::Unknown(UnknownMessage { seq: 42 })
        );
    }

    #[test]
    fn test_known_type_with_bad_body_is_an_error() {
        let json = r#"{"type":"player","seq":1,"ts":0}"#;
        assert!(parse_message(json).is_err());
    }

    #[test]
    fn test_bad_direction_is_rejected() {
        let json = r#"{"id":"p","boardId":"b","name":"n","location":{"row":0,"col":0},"direction":"up"}"#;
        assert!(serde_json::from_str::<PlayerRecord>(json).is_err());
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let player = Player::new("p", "b", "n", Location::new(0, 0), Direction::West);
        let json = serde_json::to_string(&PlayerRecord::from(&player)).unwrap();
        assert!(json.contains(r#""direction":"west""#));
        assert!(json.contains(r#""boardId":"b""#));
    }

    #[test]
    fn test_board_message_line() {
        let board = sample_board("default");
        let line = to_line(&create_board_message(1, &board)).unwrap();
        assert!(line.starts_with(r#"{"type":"board""#));
        assert!(!line.contains('\n'));

        match parse_message(&line).unwrap() {
            ParsedMessage::Board(msg) => assert_eq!(msg.board.to_board().unwrap(), board),
            other => panic!("Expected Board message, got {:?}", other),
        }
    }
}
